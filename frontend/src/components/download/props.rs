use yew::prelude::*;

/// Properties for `ButtonDownload`.
#[derive(Properties, PartialEq, Clone)]
pub struct ButtonDownloadProps {
    /// Name offered to the browser for the saved file, e.g. `john-doe.csv`.
    pub file_name: AttrValue,
    /// Number of rows the server should generate.
    pub records: u64,
    /// Extra content rendered under the button label.
    #[prop_or_default]
    pub children: Html,
}
