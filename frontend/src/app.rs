use crate::components::download::ButtonDownload;
use num_format::{Locale, ToFormattedString};
use yew::{html, Component, Context, Html};

/// File name and row count for each button on the page.
const EXPORTS: [(&str, u64); 3] = [
    ("small.csv", 1_000),
    ("medium.csv", 100_000),
    ("data.csv", 1_000_000),
];

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <main class="main">
                <h1>{"Streaming CSV export"}</h1>
                <div class="grid">
                    { for EXPORTS.iter().map(|(file_name, records)| html! {
                        <ButtonDownload file_name={*file_name} records={*records}>
                            { format!("{} rows as {}", records.to_formatted_string(&Locale::en), file_name) }
                        </ButtonDownload>
                    }) }
                </div>
            </main>
        }
    }
}
