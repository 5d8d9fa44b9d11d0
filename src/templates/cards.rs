//! UI-017: Single-purpose archetypes, the minimal card and the default plan.

use super::builder::*;
use super::Context;
use crate::core::config::Placeholders;

/// A titled card holding body text.
pub fn text_card(p: &Placeholders) -> ComponentDraft {
    card(&p.card_title).child(text(&p.body_text))
}

/// Exactly one leaf card.
pub fn minimal(title: &str) -> LayoutDraft {
    column(vec![card(title).into()])
}

pub fn default_plan(ctx: &Context<'_>) -> LayoutDraft {
    column(vec![text_card(ctx.placeholders).into()])
}

/// Headline metrics, one card per stat.
pub fn stats_grid(p: &Placeholders) -> LayoutDraft {
    let cards: Vec<Draft> = p
        .stat_cards
        .iter()
        .map(|s| card(&s.label).prop("subtitle", s.value.as_str()).into())
        .collect();
    let columns = u32::try_from(cards.len()).unwrap_or(u32::MAX);
    grid(columns, cards)
}

pub fn stats(ctx: &Context<'_>) -> LayoutDraft {
    stats_grid(ctx.placeholders)
}

pub fn kanban(ctx: &Context<'_>) -> LayoutDraft {
    let p = ctx.placeholders;
    row(p
        .kanban_lanes
        .iter()
        .map(|lane| card(lane).child(text(&p.body_text)).into())
        .collect())
}

pub fn pricing(ctx: &Context<'_>) -> LayoutDraft {
    row(ctx
        .placeholders
        .pricing_tiers
        .iter()
        .map(|tier| {
            card(&tier.name)
                .prop("subtitle", tier.price.as_str())
                .child(text(&tier.features.join(", ")))
                .child(button("Choose plan", "primary"))
                .into()
        })
        .collect())
}

pub fn gallery(ctx: &Context<'_>) -> LayoutDraft {
    let p = ctx.placeholders;
    grid(
        p.gallery_columns,
        (1..=p.gallery_size)
            .map(|i| card(&format!("Item {}", i)).into())
            .collect(),
    )
}

pub fn landing(ctx: &Context<'_>) -> LayoutDraft {
    let p = ctx.placeholders;
    let hero = card(&p.app_title)
        .prop("subtitle", p.body_text.as_str())
        .child(button("Get started", "primary"));
    column(vec![navbar(p).into(), hero.into()])
}

pub fn table_chart(ctx: &Context<'_>) -> LayoutDraft {
    let p = ctx.placeholders;
    column(vec![chart_card(p).into(), table_card(p).into()])
}

pub fn table_only(ctx: &Context<'_>) -> LayoutDraft {
    column(vec![table_card(ctx.placeholders).into()])
}

pub fn chart_only(ctx: &Context<'_>) -> LayoutDraft {
    column(vec![chart_card(ctx.placeholders).into()])
}

/// A dialog; detected fields become inputs.
pub fn modal_only(ctx: &Context<'_>) -> LayoutDraft {
    let p = ctx.placeholders;
    let mut dialog = modal("Dialog").child(text(&p.body_text));
    for field in ctx.fields {
        dialog = dialog.child(input(field));
    }
    column(vec![dialog.child(button("Close", "secondary")).into()])
}

pub fn profile(ctx: &Context<'_>) -> LayoutDraft {
    let p = ctx.placeholders;
    column(vec![card("Profile")
        .child(text(&p.body_text))
        .child(button("Edit profile", "secondary"))
        .into()])
}
