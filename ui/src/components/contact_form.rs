//! Contact generator form
//!
//! Fetches a contact on mount and whenever "Generate New Contact" is pressed,
//! using the current checkbox state as query flags. Every rendered field has
//! a copy button whose icon flips to a check mark for a couple of seconds.

use crate::api::{self, Flags};
use crate::clipboard::{self, CopyField, CopyIndicators, CopyKey, COPY_RESET_MS};
use crate::types::Contact;
use leptos::prelude::*;

#[derive(Debug, Clone, PartialEq)]
enum Display {
    Loading,
    Error,
    Loaded(Vec<Contact>),
}

#[component]
pub fn ContactForm() -> impl IntoView {
    let defaults = Flags::default();
    let (include_email, set_include_email) = signal(defaults.include_email);
    let (include_phone, set_include_phone) = signal(defaults.include_phone);
    let (include_address, set_include_address) = signal(defaults.include_address);

    let (display, set_display) = signal(Display::Loading);
    let (indicators, set_indicators) = signal(CopyIndicators::default());

    let generate = move || {
        let flags = Flags {
            include_email: include_email.get_untracked(),
            include_phone: include_phone.get_untracked(),
            include_address: include_address.get_untracked(),
        };
        set_display.set(Display::Loading);
        set_indicators.update(|i| i.clear());
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_contacts(flags).await {
                Ok(response) => set_display.set(Display::Loaded(response.into_contacts())),
                Err(e) => {
                    log::error!("Error fetching contact: {}", e);
                    set_display.set(Display::Error);
                }
            }
        });
    };

    // Load on mount
    Effect::new(move || {
        generate();
    });

    let copy = Callback::new(move |(copy_key, text): (CopyKey, String)| {
        wasm_bindgen_futures::spawn_local(async move {
            match clipboard::write_text(&text).await {
                Ok(()) => {
                    let mut token = 0;
                    set_indicators.update(|i| token = i.mark(copy_key));
                    let handle = gloo_timers::callback::Timeout::new(COPY_RESET_MS, move || {
                        set_indicators.try_update(|i| i.reset(copy_key, token));
                    });
                    handle.forget();
                }
                Err(e) => log::error!("Failed to copy to clipboard: {}", e),
            }
        });
    });

    let docs_href = api::docs_url();

    view! {
        <div class="min-h-screen bg-gray-100 flex flex-col items-center py-10 px-4">
            <div class="bg-white shadow rounded-lg p-6 w-full max-w-xl">
                <h1 class="text-2xl font-bold text-gray-900 mb-6">"Contact Generator"</h1>

                <div class="space-y-2 mb-6">
                    <Toggle label="Include email" checked=include_email set_checked=set_include_email />
                    <Toggle label="Include phone" checked=include_phone set_checked=set_include_phone />
                    <Toggle label="Include address" checked=include_address set_checked=set_include_address />
                </div>

                <button
                    class="w-full px-4 py-2 bg-blue-600 text-white rounded hover:bg-blue-700 disabled:opacity-50"
                    disabled=move || display.with(|d| *d == Display::Loading)
                    on:click=move |_| generate()
                >
                    "Generate New Contact"
                </button>

                <div class="mt-6">
                    {move || match display.get() {
                        Display::Loading => view! {
                            <p class="text-gray-500">"Loading..."</p>
                        }.into_any(),
                        Display::Error => view! {
                            <p class="text-red-600">"Error fetching contact"</p>
                        }.into_any(),
                        Display::Loaded(contacts) => contacts
                            .into_iter()
                            .enumerate()
                            .map(|(index, contact)| view! {
                                <ContactCard index=index contact=contact indicators=indicators copy=copy />
                            })
                            .collect::<Vec<_>>()
                            .into_any(),
                    }}
                </div>
            </div>

            <footer class="mt-6 text-sm text-gray-500">
                <a href=docs_href class="hover:text-gray-700 underline">"API documentation"</a>
            </footer>
        </div>
    }
}

#[component]
fn Toggle(
    label: &'static str,
    checked: ReadSignal<bool>,
    set_checked: WriteSignal<bool>,
) -> impl IntoView {
    view! {
        <label class="flex items-center gap-2 text-gray-700">
            <input
                type="checkbox"
                class="h-4 w-4"
                prop:checked=move || checked.get()
                on:change=move |ev| set_checked.set(event_target_checked(&ev))
            />
            {label}
        </label>
    }
}

#[component]
fn ContactCard(
    index: usize,
    contact: Contact,
    indicators: ReadSignal<CopyIndicators>,
    copy: Callback<(CopyKey, String)>,
) -> impl IntoView {
    let record = contact.to_json();

    view! {
        <div class="border border-gray-200 rounded p-4 mb-3">
            <div class="flex justify-between items-center mb-2">
                <span class="text-xs text-gray-400 uppercase tracking-wide">
                    {format!("Contact {}", index + 1)}
                </span>
                <CopyButton
                    copy_key=CopyKey::new(index, CopyField::All)
                    text=record
                    indicators=indicators
                    copy=copy
                />
            </div>
            <FieldRow
                label="Name"
                value=contact.name
                copy_key=CopyKey::new(index, CopyField::Name)
                indicators=indicators
                copy=copy
            />
            {contact.email.map(|email| view! {
                <FieldRow
                    label="Email"
                    value=email
                    copy_key=CopyKey::new(index, CopyField::Email)
                    indicators=indicators
                    copy=copy
                />
            })}
            {contact.phone.map(|phone| view! {
                <FieldRow
                    label="Phone"
                    value=phone
                    copy_key=CopyKey::new(index, CopyField::Phone)
                    indicators=indicators
                    copy=copy
                />
            })}
            {contact.address.map(|address| view! {
                <FieldRow
                    label="Address"
                    value=address.one_line()
                    copy_key=CopyKey::new(index, CopyField::Address)
                    indicators=indicators
                    copy=copy
                />
            })}
        </div>
    }
}

#[component]
fn FieldRow(
    label: &'static str,
    value: String,
    copy_key: CopyKey,
    indicators: ReadSignal<CopyIndicators>,
    copy: Callback<(CopyKey, String)>,
) -> impl IntoView {
    view! {
        <div class="flex items-center justify-between py-1">
            <div>
                <span class="text-sm font-medium text-gray-600 mr-2">{label}":"</span>
                <span class="text-gray-900">{value.clone()}</span>
            </div>
            <CopyButton copy_key=copy_key text=value indicators=indicators copy=copy />
        </div>
    }
}

#[component]
fn CopyButton(
    copy_key: CopyKey,
    text: String,
    indicators: ReadSignal<CopyIndicators>,
    copy: Callback<(CopyKey, String)>,
) -> impl IntoView {
    view! {
        <button
            class="px-2 py-1 text-sm rounded hover:bg-gray-100"
            title="Copy to clipboard"
            on:click=move |_| copy.run((copy_key, text.clone()))
        >
            {move || indicators.with(|i| i.icon(copy_key))}
        </button>
    }
}
