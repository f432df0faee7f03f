use crate::constants::*;
use crate::core::content::{
    Collection, Review, BRANDS, BRAND_COPIES, COLLECTIONS, HERO_FEATURES, NAV_LINKS,
    REVIEWS, REVIEW_COPIES, REVIEW_STARS, STORY_STATS,
};
use crate::core::shell::{anchor_for, marquee_track, reversed_track};
use crate::dom::{append, element};
use anyhow::anyhow;
use web_sys as web;

/// Fill the page's data-driven regions. Must run before fade-in regions are
/// wired, since collection cards carry `data-reveal` themselves.
pub fn populate(document: &web::Document) -> anyhow::Result<()> {
    nav_links(document)?;
    hero_features(document)?;
    brand_track(document)?;
    story_stats(document)?;
    collections(document)?;
    review_tracks(document)?;
    log::info!("[page] content populated");
    Ok(())
}

fn by_id(document: &web::Document, id: &str) -> anyhow::Result<web::Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow!("missing #{}", id))
}

fn set_attr(el: &web::Element, name: &str, value: &str) -> anyhow::Result<()> {
    el.set_attribute(name, value)
        .map_err(|e| anyhow!("{:?}", e))
}

fn image(document: &web::Document, class: &str, src: &str, alt: &str) -> anyhow::Result<web::Element> {
    let img = element(document, "img", class, None)?;
    set_attr(&img, "src", src)?;
    set_attr(&img, "alt", alt)?;
    set_attr(&img, "loading", "lazy")?;
    Ok(img)
}

fn nav_links(document: &web::Document) -> anyhow::Result<()> {
    let desktop = by_id(document, NAV_LINKS_ID)?;
    let mobile = by_id(document, MOBILE_LINKS_ID)?;
    for (i, &label) in NAV_LINKS.iter().enumerate() {
        let href = anchor_for(label);

        let a = element(document, "a", "nav-link", Some(label))?;
        set_attr(&a, "href", &href)?;
        append(&desktop, &a)?;

        let a = element(document, "a", "mobile-link", Some(label))?;
        set_attr(&a, "href", &href)?;
        set_attr(&a, "style", &format!("transition-delay: {}ms", i * 50))?;
        append(&mobile, &a)?;
    }
    Ok(())
}

fn hero_features(document: &web::Document) -> anyhow::Result<()> {
    let list = by_id(document, HERO_FEATURES_ID)?;
    for &feature in HERO_FEATURES {
        let item = element(document, "li", "hero-feature", Some(feature))?;
        append(&list, &item)?;
    }
    Ok(())
}

fn brand_track(document: &web::Document) -> anyhow::Result<()> {
    let track = by_id(document, BRAND_TRACK_ID)?;
    for brand in marquee_track(BRANDS, BRAND_COPIES) {
        let item = element(document, "div", "brand", None)?;
        append(&item, &element(document, "h3", "brand-name", Some(brand))?)?;
        append(&item, &element(document, "span", "brand-sep", Some("\u{2726}"))?)?;
        append(&track, &item)?;
    }
    Ok(())
}

fn story_stats(document: &web::Document) -> anyhow::Result<()> {
    let row = by_id(document, STORY_STATS_ID)?;
    for stat in STORY_STATS {
        let cell = element(document, "div", "stat", None)?;
        append(&cell, &element(document, "p", "stat-value", Some(stat.value))?)?;
        append(&cell, &element(document, "p", "stat-label", Some(stat.label))?)?;
        append(&row, &cell)?;
    }
    Ok(())
}

fn collections(document: &web::Document) -> anyhow::Result<()> {
    let grid = by_id(document, COLLECTION_GRID_ID)?;
    for c in COLLECTIONS {
        append(&grid, &collection_card(document, c)?)?;
    }
    Ok(())
}

fn collection_card(document: &web::Document, c: &Collection) -> anyhow::Result<web::Element> {
    let card = element(document, "article", "collection fade-in", None)?;
    set_attr(&card, "data-reveal", "")?;
    set_attr(&card, REVEAL_DELAY_ATTR, &c.delay_ms.to_string())?;
    append(&card, &image(document, "collection-img", c.image, c.title)?)?;

    let glass = element(document, "div", "collection-glass", None)?;
    append(&glass, &element(document, "h3", "collection-title", Some(c.title))?)?;
    append(&glass, &element(document, "p", "collection-desc", Some(c.description))?)?;
    append(&card, &glass)?;
    Ok(card)
}

fn review_tracks(document: &web::Document) -> anyhow::Result<()> {
    let forward = by_id(document, REVIEWS_TRACK_ID)?;
    for r in marquee_track(REVIEWS, REVIEW_COPIES) {
        append(&forward, &review_card(document, &r, "review")?)?;
    }
    let reverse = by_id(document, REVIEWS_TRACK_REVERSE_ID)?;
    for r in reversed_track(REVIEWS, REVIEW_COPIES) {
        append(&reverse, &review_card(document, &r, "review review--alt")?)?;
    }
    Ok(())
}

fn review_card(document: &web::Document, r: &Review, class: &str) -> anyhow::Result<web::Element> {
    let card = element(document, "div", class, None)?;
    let stars = "\u{2605}".repeat(REVIEW_STARS);
    append(&card, &element(document, "div", "review-stars", Some(stars.as_str()))?)?;
    let quote = format!("\"{}\"", r.text);
    append(&card, &element(document, "p", "review-text", Some(quote.as_str()))?)?;

    let who = element(document, "div", "review-author", None)?;
    append(&who, &image(document, "review-avatar", r.image, r.name)?)?;
    let names = element(document, "div", "", None)?;
    append(&names, &element(document, "p", "review-name", Some(r.name))?)?;
    append(&names, &element(document, "p", "review-loc", Some(r.location))?)?;
    append(&who, &names)?;
    append(&card, &who)?;
    Ok(card)
}
