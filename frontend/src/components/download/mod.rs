//! Download button: fetches a generated CSV from the backend and saves it.
//!
//! Clicking the button issues exactly one `GET /api/csv` request. Clicking
//! again while a request is running starts another, independent request.

use gloo_console::{error, log};
use yew::platform::spawn_local;
use yew::prelude::*;

mod messages;
mod props;
mod state;
mod view;

use crate::api::fetch_csv;
use crate::helpers::save_file::BrowserSaver;
pub use messages::Msg;
pub use props::ButtonDownloadProps;
use state::DownloadState;

pub struct ButtonDownload {
    state: DownloadState,
}

impl Component for ButtonDownload {
    type Message = Msg;
    type Properties = ButtonDownloadProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            state: DownloadState::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Download => {
                self.state.begin();
                let link = ctx.link().clone();
                let file_name = ctx.props().file_name.clone();
                let records = ctx.props().records;
                spawn_local(async move {
                    let outcome = fetch_csv(&file_name, records).await;
                    link.send_message(Msg::Finished { file_name, outcome });
                });
                true
            }
            Msg::Finished { file_name, outcome } => {
                match self.state.finish(outcome, &file_name, &BrowserSaver) {
                    Ok(()) => log!(format!("Saved {}", file_name)),
                    Err(err) => error!(err.to_string()),
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(&self.state, ctx)
    }
}
