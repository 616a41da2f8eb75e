//! Chat Panel - View Component

use super::view_model::{ChatVm, ViewLifetime};
use crate::layout::use_modal;
use crate::shared::components::ui::Button;
use crate::shared::config::use_config;
use crate::shared::date_utils::format_local_clock;
use crate::shared::icons::icon;
use contracts::domain::a001_chat::aggregate::ChatMessage;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use thaw::{Flex, FlexAlign, FlexGap, Input};

#[component]
pub fn ChatPanel(
    /// Toggles the off-canvas file sidebar on narrow screens
    on_toggle_sidebar: Callback<()>,
) -> impl IntoView {
    let config = use_config();
    let modal = use_modal();
    let vm = ChatVm::new(&config.greeting);
    let messages_container_ref = NodeRef::<leptos::html::Div>::new();

    let lifetime = ViewLifetime::new();
    on_cleanup({
        let lifetime = lifetime.clone();
        move || lifetime.end()
    });

    let scroll_to_bottom = move || {
        if let Some(container) = messages_container_ref.get() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    };

    let reply_delay_ms = config.reply_delay_ms;
    let bot_reply = config.bot_reply.clone();
    let handle_send = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(ticket) = vm.submit() else {
            return;
        };
        log::debug!("message sent, bot reply in {}ms", reply_delay_ms);
        scroll_to_bottom();

        let lifetime = lifetime.clone();
        let bot_reply = bot_reply.clone();
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(reply_delay_ms).await;
            if !lifetime.is_alive() {
                log::debug!("chat view closed, bot reply dropped");
                return;
            }
            if vm.deliver(ticket, &bot_reply) {
                log::debug!("bot reply delivered");
                scroll_to_bottom();
            } else {
                log::debug!("conversation ended, bot reply dropped");
            }
        });
    };

    let greeting = config.greeting.clone();
    let handle_end = Callback::new(move |_| {
        log::info!("chat ended");
        vm.end(&greeting);
    });

    view! {
        <div class="chat">
            <header class="chat__header">
                <Flex align=FlexAlign::Center gap=FlexGap::Small>
                    <Button
                        variant="ghost"
                        size="icon"
                        class="mobile-only"
                        sr_label="Toggle files"
                        on_click=Callback::new(move |_| on_toggle_sidebar.run(()))
                    >
                        {icon("menu")}
                    </Button>
                    <h1 class="chat__title">"ChatBot"</h1>
                </Flex>
                <Button variant="outline" class="desktop-only" on_click=handle_end>
                    "End Chat"
                </Button>
            </header>

            <div class="chat__messages" node_ref=messages_container_ref>
                <For
                    each=move || vm.conversation.with(|c| c.messages().to_vec())
                    key=|msg| (msg.id, msg.timestamp)
                    let:msg
                >
                    <MessageBubble message=msg />
                </For>
            </div>

            <div class="chat__composer">
                <form class="chat__form" on:submit=handle_send>
                    <Button
                        variant="outline"
                        size="icon"
                        class="desktop-only"
                        sr_label="Attach file"
                        on_click=Callback::new(move |_| modal.show())
                    >
                        {icon("paperclip")}
                    </Button>
                    <div class="chat__input">
                        <Input value=vm.input placeholder="Type your message..." />
                    </div>
                    <Button variant="outline" size="icon" class="desktop-only" sr_label="Voice input">
                        {icon("mic")}
                    </Button>
                    <Button button_type="submit" size="icon" sr_label="Send">
                        {icon("send")}
                    </Button>
                </form>
            </div>
        </div>
    }
}

#[component]
fn MessageBubble(message: ChatMessage) -> impl IntoView {
    let is_user = message.sender.is_user();
    let time = format_local_clock(&message.timestamp);

    view! {
        <div class="message" class:mine=is_user>
            <div class="message__row">
                <span class="avatar">{message.sender.avatar_letter()}</span>
                <div class="message__body">
                    <div class="message__bubble">{message.text}</div>
                    <span class="message__time">{time}</span>
                </div>
            </div>
        </div>
    }
}
