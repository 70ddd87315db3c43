mod card;
mod spawned_card;
mod user_card;
