//! UI-018: Form templates.
//!
//! Fields come from detection over the instruction; a form with no
//! recognized fields gets the template's defaults. Every form ends with a
//! submit button and is wrapped in a dialog when a modal was asked for.

use super::builder::*;
use super::Context;
use crate::intent::fields::{self, FormField};
use crate::intent::vocabulary::Concept;

fn fields_or_defaults(ctx: &Context<'_>, defaults: &[&str]) -> Vec<FormField> {
    if !ctx.fields.is_empty() {
        return ctx.fields.to_vec();
    }
    defaults
        .iter()
        .filter_map(|label| fields::default_field(label))
        .map(|(label, input_type, placeholder)| FormField::new(label, input_type, placeholder))
        .collect()
}

fn form(ctx: &Context<'_>, title: &str, defaults: &[&str], submit: &str) -> LayoutDraft {
    let container = if ctx.features.has(Concept::Modal) {
        modal(title)
    } else {
        card(title)
    };
    let body = fields_or_defaults(ctx, defaults)
        .iter()
        .fold(container, |acc, field| acc.child(input(field)));
    column(vec![body.child(button(submit, "primary")).into()])
}

pub fn login(ctx: &Context<'_>) -> LayoutDraft {
    form(ctx, "Sign in", &["Email", "Password"], "Sign in")
}

pub fn signup(ctx: &Context<'_>) -> LayoutDraft {
    form(
        ctx,
        "Create account",
        &["Name", "Email", "Password", "Confirm Password"],
        "Sign up",
    )
}

pub fn contact(ctx: &Context<'_>) -> LayoutDraft {
    form(ctx, "Contact us", &["Name", "Email", "Message"], "Send message")
}

pub fn settings(ctx: &Context<'_>) -> LayoutDraft {
    form(ctx, "Settings", &["Name", "Email"], "Save changes")
}

pub fn generic(ctx: &Context<'_>) -> LayoutDraft {
    form(ctx, "Form", &["Name", "Email"], "Submit")
}
