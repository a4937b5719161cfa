use yew::prelude::*;

use super::state::DownloadState;
use super::{ButtonDownload, Msg};

pub fn view(state: &DownloadState, ctx: &Context<ButtonDownload>) -> Html {
    let onclick = ctx.link().callback(|_: MouseEvent| Msg::Download);

    html! {
        <button class="card" {onclick} aria-busy={state.is_loading.to_string()}>
            <h2>{ state.label() }</h2>
            <p>{ ctx.props().children.clone() }</p>
        </button>
    }
}
