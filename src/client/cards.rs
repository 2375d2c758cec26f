use crate::client::state::Catalog;
use crate::model::Book;
use serde::Serialize;
use uuid::Uuid;

/// What a card in the list view shows: enough to render a link to the
/// detail view. No mutation happens here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardSummary {
    pub id: Uuid,
    pub title: String,
    pub author: String,
}

impl From<&Book> for CardSummary {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id,
            title: book.title.clone(),
            author: book.author.clone(),
        }
    }
}

/// Project the catalog into card summaries, preserving its order.
pub fn summaries(catalog: &Catalog) -> Vec<CardSummary> {
    catalog.books().iter().map(CardSummary::from).collect()
}
