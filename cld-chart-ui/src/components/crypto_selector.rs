//! Dropdown selector for choosing a cryptocurrency.

use crate::state::AppState;
use dioxus::prelude::*;

/// Crypto dropdown selector.
/// Reads the record collection from AppState and updates selected_crypto on
/// change; every change re-runs the price chart effect in the app.
#[component]
pub fn CryptoSelector() -> Element {
    let mut state = use_context::<AppState>();
    let records = state.records.read().clone();
    let selected = (state.selected_crypto)();

    let on_change = move |evt: Event<FormData>| {
        let value = evt.value();
        state.selected_crypto.set(value);
    };

    rsx! {
        div {
            style: "margin: 8px 0; width: 50%; margin-left: auto; margin-right: auto;",
            label {
                r#for: "crypto-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Crypto: "
            }
            select {
                id: "crypto-select",
                onchange: on_change,
                for record in records.iter() {
                    option {
                        value: "{record.name}",
                        selected: record.name == selected,
                        "{record.name} ({record.symbol})"
                    }
                }
            }
        }
    }
}
