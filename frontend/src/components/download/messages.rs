use crate::api::FetchOutcome;
use yew::AttrValue;

#[derive(Clone)]
pub enum Msg {
    Download,
    /// A request settled. `file_name` is the name the request was started
    /// with, not whatever the props say by now.
    Finished {
        file_name: AttrValue,
        outcome: FetchOutcome,
    },
}
