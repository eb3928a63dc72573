//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dialogs, forms, and panels while reading session and
//! config from Leptos context. State transitions live in `crate::state`.

pub mod confirm_dialog;
pub mod gym_card;
pub mod gym_form_dialog;
pub mod login_form;
pub mod map_selector;
pub mod modal;
pub mod qr_dialog;
pub mod register_form;
pub mod turnstile_panel;
