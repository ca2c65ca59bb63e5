use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "shortUrl", default)]
    pub short_url: String,
}

/// A sticker placed on a card.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Sticker {
    pub id: String,
    pub image: String,
    #[serde(rename = "imageUrl", default)]
    pub image_url: Option<String>,
}

/// One entry of a card's action feed. Comments are the entries whose
/// `data.text` is present; every other field Trello sends is ignored.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub id: String,
    #[serde(default)]
    pub data: ActionData,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionData {
    #[serde(default)]
    pub text: Option<String>,
}
