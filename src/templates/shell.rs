//! UI-016: Application shell templates.
//!
//! Secondary panel, top bar and two-way split combinations, plus the
//! dashboard. With a panel the root is a `Row` of the panel and a `Column`
//! holding everything else; without one the root is that `Column`.

use super::builder::*;
use super::cards;
use super::Context;
use crate::intent::vocabulary::Concept;

fn shell(ctx: &Context<'_>, with_sidebar: bool, with_navbar: bool, body: Vec<Draft>) -> LayoutDraft {
    let p = ctx.placeholders;
    let mut main: Vec<Draft> = Vec::new();
    if with_navbar {
        main.push(navbar(p).into());
    }
    main.extend(body);

    if with_sidebar {
        row(vec![sidebar(p).into(), column(main).into()])
    } else {
        column(main)
    }
}

/// Exactly two cards: chart and table cards when requested, text cards otherwise.
fn split_cards(ctx: &Context<'_>) -> Vec<Draft> {
    let p = ctx.placeholders;
    let mut out: Vec<Draft> = Vec::new();
    if ctx.features.has(Concept::Chart) {
        out.push(chart_card(p).into());
    }
    if ctx.features.has(Concept::Table) {
        out.push(table_card(p).into());
    }
    while out.len() < 2 {
        out.push(cards::text_card(p).into());
    }
    out
}

fn split_row(ctx: &Context<'_>) -> Draft {
    row(split_cards(ctx)).into()
}

/// Body for shells without an explicit split.
fn main_content(ctx: &Context<'_>) -> Vec<Draft> {
    let p = ctx.placeholders;
    let chart = ctx.features.has(Concept::Chart);
    let table = ctx.features.has(Concept::Table);
    match (chart, table) {
        (true, true) => vec![split_row(ctx)],
        (true, false) => vec![chart_card(p).into()],
        (false, true) => vec![table_card(p).into()],
        (false, false) => vec![cards::text_card(p).into()],
    }
}

pub fn sidebar_navbar_split(ctx: &Context<'_>) -> LayoutDraft {
    shell(ctx, true, true, vec![split_row(ctx)])
}

pub fn sidebar_navbar(ctx: &Context<'_>) -> LayoutDraft {
    shell(ctx, true, true, main_content(ctx))
}

pub fn sidebar_split(ctx: &Context<'_>) -> LayoutDraft {
    shell(ctx, true, false, vec![split_row(ctx)])
}

pub fn sidebar_only(ctx: &Context<'_>) -> LayoutDraft {
    shell(ctx, true, false, main_content(ctx))
}

pub fn navbar_split(ctx: &Context<'_>) -> LayoutDraft {
    shell(ctx, false, true, vec![split_row(ctx)])
}

pub fn navbar_only(ctx: &Context<'_>) -> LayoutDraft {
    shell(ctx, false, true, main_content(ctx))
}

pub fn split(ctx: &Context<'_>) -> LayoutDraft {
    row(split_cards(ctx))
}

/// Full dashboard. Every part can be excluded by name ("without a sidebar").
pub fn dashboard(ctx: &Context<'_>) -> LayoutDraft {
    let p = ctx.placeholders;
    let f = ctx.features;

    let mut insights: Vec<Draft> = Vec::new();
    if !f.excludes(Concept::Chart) {
        insights.push(chart_card(p).into());
    }
    if !f.excludes(Concept::Table) {
        insights.push(table_card(p).into());
    }

    let mut body: Vec<Draft> = vec![cards::stats_grid(p).into()];
    if !insights.is_empty() {
        body.push(row(insights).into());
    }

    shell(
        ctx,
        !f.excludes(Concept::Sidebar),
        !f.excludes(Concept::Navbar),
        body,
    )
}
