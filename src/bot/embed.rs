//! Embed and button builders.
//!
//! Pure functions from domain models to serenity builders, kept apart from the handlers
//! so message layout can be tested without a gateway.

use serenity::all::{
    ButtonStyle, CreateActionRow, CreateButton, CreateEmbed, CreateEmbedFooter, ReactionType,
};

use crate::{
    bot::component::claim::claim_custom_id,
    model::{
        catalog::CatalogScan,
        collection::{CollectionEntry, CollectionSummary},
        rarity::Rarity,
        spawned_card::SpawnSlot,
    },
    service::registry::SpawnSession,
};

/// Filename of the rendered spawn image attachment.
pub const SPAWN_IMAGE_NAME: &str = "spawn.png";

/// Discord's limit on button label length.
const BUTTON_LABEL_LIMIT: usize = 80;
/// Discord's limit on embed description length.
const DESCRIPTION_LIMIT: usize = 4096;
/// Listing budget for embed field values, below Discord's 1024 limit.
const FIELD_LIST_LIMIT: usize = 1000;
const INVALID_FILES_SHOWN: usize = 10;

/// Embed announcing a fresh spawn.
///
/// # Arguments
/// - `slots` - Spawned slots in button order
/// - `with_image` - Whether the rendered image is attached
pub fn spawn_embed(slots: &[SpawnSlot], with_image: bool) -> CreateEmbed {
    let top_rarity = slots
        .iter()
        .map(|s| s.slot.rarity)
        .max()
        .unwrap_or(Rarity::Common);

    let mut embed = CreateEmbed::new()
        .title("🎴 Cards Spawned!")
        .description("Click a button below to claim a card. First come, first served!")
        .color(top_rarity.color())
        .footer(CreateEmbedFooter::new(format!(
            "{} card{} up for grabs",
            slots.len(),
            if slots.len() == 1 { "" } else { "s" }
        )));

    for (index, slot) in slots.iter().enumerate() {
        embed = embed.field(
            format!("{} Slot {}", slot.slot.rarity.emoji(), index + 1),
            format!("**{}**\n{}", slot.card.name, slot.slot.rarity),
            true,
        );
    }

    if with_image {
        embed = embed.image(format!("attachment://{}", SPAWN_IMAGE_NAME));
    }

    embed
}

/// One row of claim buttons reflecting the current claim state of every slot.
pub fn claim_buttons(session: &SpawnSession) -> Vec<CreateActionRow> {
    let buttons = session
        .slots
        .iter()
        .map(|slot| {
            let button = CreateButton::new(claim_custom_id(slot.spawned_card_id))
                .emoji(ReactionType::Unicode(slot.rarity.emoji().to_string()));

            match slot.claimed_by {
                Some(_) => button
                    .label(button_label("Claimed", &slot.card_name))
                    .style(ButtonStyle::Secondary)
                    .disabled(true),
                None => button
                    .label(button_label("Claim", &slot.card_name))
                    .style(ButtonStyle::Primary),
            }
        })
        .collect();

    vec![CreateActionRow::Buttons(buttons)]
}

/// Builds a button label, truncated to Discord's limit.
pub fn button_label(action: &str, card_name: &str) -> String {
    truncate_chars(&format!("{}: {}", action, card_name), BUTTON_LABEL_LIMIT)
}

/// Public announcement of a successful claim.
pub fn claim_announcement(user_id: u64, slot: &SpawnSlot, count: i32) -> CreateEmbed {
    let rarity = slot.slot.rarity;

    CreateEmbed::new()
        .title(format!("{} Card Claimed!", rarity.emoji()))
        .description(format!(
            "<@{}> claimed **{}** ({})!",
            user_id, slot.card.name, rarity
        ))
        .color(rarity.color())
        .footer(CreateEmbedFooter::new(format!("They now own {} of this card", count)))
}

/// Ephemeral collection view.
pub fn collection_embed(username: &str, entries: &[CollectionEntry]) -> CreateEmbed {
    let summary = CollectionSummary::from_entries(entries);
    let top_rarity = entries
        .iter()
        .map(|e| e.rarity)
        .max()
        .unwrap_or(Rarity::Common);

    let mut embed = CreateEmbed::new()
        .title(format!("🎴 {}'s Collection", username))
        .description(collection_lines(entries, DESCRIPTION_LIMIT))
        .color(top_rarity.color())
        .field("Total Cards", summary.total_cards.to_string(), true)
        .field("Unique Cards", summary.distinct_entries.to_string(), true);

    let breakdown = Rarity::ALL
        .iter()
        .rev()
        .filter_map(|rarity| {
            summary
                .per_rarity
                .get(rarity)
                .map(|count| format!("{} {}: {}", rarity.emoji(), rarity, count))
        })
        .collect::<Vec<_>>()
        .join("\n");

    if !breakdown.is_empty() {
        embed = embed.field("By Rarity", breakdown, false);
    }

    embed
}

/// Renders collection entries as lines, cutting off with a remainder note at `limit`.
pub fn collection_lines(entries: &[CollectionEntry], limit: usize) -> String {
    let lines: Vec<String> = entries
        .iter()
        .map(|e| {
            format!(
                "{} **{}** ({}) ×{}",
                e.rarity.emoji(),
                e.card_name,
                e.rarity,
                e.count
            )
        })
        .collect();

    join_limited(&lines, limit)
}

/// Admin listing of the art directory.
pub fn catalog_listing_embed(scan: &CatalogScan) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .title("📁 Card Catalog")
        .color(0x0080ff);

    let valid = if scan.valid_files.is_empty() {
        "No valid card images found.".to_string()
    } else {
        join_limited(&scan.valid_files, FIELD_LIST_LIMIT)
    };
    embed = embed.field(format!("Valid Cards ({})", scan.valid_files.len()), valid, false);

    if !scan.invalid_files.is_empty() {
        let shown: Vec<String> = scan
            .invalid_files
            .iter()
            .take(INVALID_FILES_SHOWN)
            .cloned()
            .collect();
        let mut value = shown.join("\n");
        if scan.invalid_files.len() > INVALID_FILES_SHOWN {
            value.push_str(&format!(
                "\n…and {} more",
                scan.invalid_files.len() - INVALID_FILES_SHOWN
            ));
        }
        embed = embed.field(
            format!("Invalid Files ({})", scan.invalid_files.len()),
            value,
            false,
        );
    }

    embed
}

/// Admin summary of the art directory.
pub fn catalog_info_embed(directory: &str, scan: &CatalogScan) -> CreateEmbed {
    CreateEmbed::new()
        .title("📊 Card Directory Info")
        .color(0x0080ff)
        .field("Directory", format!("`{}`", directory), false)
        .field("Exists", if scan.exists { "✅ Yes" } else { "❌ No" }, true)
        .field("Valid Cards", scan.valid_files.len().to_string(), true)
        .field("Invalid Files", scan.invalid_files.len().to_string(), true)
        .field("Total Size", format!("{:.2} MB", scan.total_megabytes()), true)
}

/// Joins lines with newlines, stopping before `limit` characters and noting the rest.
pub fn join_limited(lines: &[String], limit: usize) -> String {
    let mut out = String::new();
    let mut used = 0;

    for (index, line) in lines.iter().enumerate() {
        let remaining = lines.len() - index;
        let note = format!("…and {} more", remaining);
        let separator = usize::from(!out.is_empty());

        // Room must stay for the note that would follow if the next line does not fit
        let reserve = if remaining > 1 {
            1 + note.chars().count()
        } else {
            0
        };

        if used + separator + line.chars().count() + reserve > limit {
            if separator == 1 {
                out.push('\n');
            }
            out.push_str(&note);
            return out;
        }

        if separator == 1 {
            out.push('\n');
        }
        out.push_str(line);
        used += separator + line.chars().count();
    }

    out
}

fn truncate_chars(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(limit.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}
