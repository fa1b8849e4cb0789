use serde::Serialize;

/// A single mutation applied to the item store, handed to dependent views
/// as soon as it happens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StoreChange {
    Appended { position: usize, label: String },
    Inserted { position: usize, label: String },
    Removed { position: usize, label: String },
}

impl StoreChange {
    pub fn position(&self) -> usize {
        match self {
            StoreChange::Appended { position, .. }
            | StoreChange::Inserted { position, .. }
            | StoreChange::Removed { position, .. } => *position,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            StoreChange::Appended { label, .. }
            | StoreChange::Inserted { label, .. }
            | StoreChange::Removed { label, .. } => label,
        }
    }
}

/// Ordered, string-labeled items. Identity is positional: two items with
/// the same label are still distinct entries.
#[derive(Debug, Clone, Default)]
pub struct ItemStore {
    items: Vec<String>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from labels in order.
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ItemStore {
            items: labels.into_iter().map(Into::into).collect(),
        }
    }

    /// The numbered labels `"0"`, `"1"`, ... up to `count - 1`.
    pub fn numbered(count: usize) -> Self {
        Self::from_labels((0..count).map(|i| i.to_string()))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&str> {
        self.items.get(position).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    pub fn labels(&self) -> &[String] {
        &self.items
    }

    /// Position of the first item with this label.
    pub fn position_of(&self, label: &str) -> Option<usize> {
        self.items.iter().position(|l| l == label)
    }

    pub fn append(&mut self, label: impl Into<String>) -> StoreChange {
        let label = label.into();
        self.items.push(label.clone());
        StoreChange::Appended {
            position: self.items.len() - 1,
            label,
        }
    }

    /// Insert at `position`, clamped to the end of the list.
    pub fn insert_at(&mut self, position: usize, label: impl Into<String>) -> StoreChange {
        let label = label.into();
        let position = position.min(self.items.len());
        self.items.insert(position, label.clone());
        StoreChange::Inserted { position, label }
    }

    pub fn remove_at(&mut self, position: usize) -> Option<StoreChange> {
        if position >= self.items.len() {
            return None;
        }
        let label = self.items.remove(position);
        Some(StoreChange::Removed { position, label })
    }

    /// Remove the first item with this label. With duplicate labels only the
    /// earliest one goes.
    pub fn remove_by_label(&mut self, label: &str) -> Option<StoreChange> {
        let position = self.position_of(label)?;
        self.remove_at(position)
    }
}
