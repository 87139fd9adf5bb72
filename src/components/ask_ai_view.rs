//! Ask AI View Component
//!
//! In-memory Q&A transcript. Each successful round trip appends the question
//! and the answer; a failed send leaves the transcript and inputs as they were.

use habit_client::{read_attachment, AskRequest, ChatMessage, ChatRole, Transcript};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{read_file, ImagePicker, Notice};
use crate::context::use_app_context;
use crate::markdown::render_answer;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn AskAiView() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let transcript = RwSignal::new(Transcript::new());
    let (question, set_question) = signal(String::new());
    let image = RwSignal::new_local(None::<web_sys::File>);
    let (notice, set_notice) = signal::<Option<String>>(None);

    let send = move || {
        let Some(habit_id) = store.active_habit().get_untracked() else {
            set_notice.set(Some("Select a habit first.".to_string()));
            return;
        };
        let text = question.get_untracked();
        let file = image.get_untracked();
        let api = ctx.api();
        spawn_local(async move {
            let data_url = match read_attachment(file.map(read_file)).await {
                Ok(data_url) => data_url,
                Err(err) => {
                    tracing::warn!(error = %err, "failed to read image");
                    set_notice.set(Some("Couldn't read the selected image.".to_string()));
                    return;
                }
            };
            let request = AskRequest {
                habit_id: &habit_id,
                question: &text,
                image_base64: data_url.as_deref(),
            };
            match api.ask(&request).await {
                Ok(reply) => {
                    transcript.update(|t| {
                        t.record_exchange(text.clone(), data_url.clone(), reply.answer)
                    });
                    set_question.set(String::new());
                    image.set(None);
                    set_notice.set(None);
                }
                Err(err) => set_notice.set(Some(err.notice())),
            }
        });
    };

    let messages = move || {
        transcript.with(|t| t.messages().iter().cloned().enumerate().collect::<Vec<_>>())
    };

    view! {
        <div class="ask-ai">
            <div class="transcript">
                <For
                    each=messages
                    key=|(index, _)| *index
                    children=move |(_, message)| view! { <ChatBubble message=message /> }
                />
            </div>
            <Notice message=notice />
            <form
                class="ask-form"
                on:submit=move |ev: web_sys::SubmitEvent| {
                    ev.prevent_default();
                    send();
                }
            >
                <input
                    type="text"
                    class="ask-input"
                    placeholder="Ask a question..."
                    prop:value=move || question.get()
                    on:input=move |ev| set_question.set(event_target_value(&ev))
                />
                <ImagePicker selected=image />
                <button type="submit" class="primary-btn pill">"Send"</button>
            </form>
        </div>
    }
}

#[component]
fn ChatBubble(message: ChatMessage) -> impl IntoView {
    let (row_class, bubble_class) = match message.role {
        ChatRole::Assistant => ("bubble-row from-assistant", "bubble assistant"),
        ChatRole::User => ("bubble-row from-user", "bubble user"),
    };
    let body = match message.role {
        ChatRole::Assistant => {
            let html = render_answer(&message.content);
            view! { <div class="bubble-text markdown" inner_html=html></div> }.into_any()
        }
        ChatRole::User => {
            view! { <div class="bubble-text plain">{message.content}</div> }.into_any()
        }
    };

    view! {
        <div class=row_class>
            <div class=bubble_class>
                {message
                    .image_base64
                    .map(|src| view! { <img class="bubble-image" src=src alt="uploaded" /> })}
                {body}
            </div>
        </div>
    }
}
