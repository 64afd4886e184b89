use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub index: usize,
    pub name: String,
    pub desc: String,
    pub loaded_at: DateTime<Utc>,
}

/// Builds `count` consecutive items starting at `start`.
pub fn page(start: usize, count: usize, loaded_at: DateTime<Utc>) -> Vec<Item> {
    (start..start + count)
        .map(|index| Item {
            index,
            name: format!("Item {index}"),
            desc: format!("Description {index}"),
            loaded_at,
        })
        .collect()
}

#[derive(Debug, Default)]
pub struct Feed {
    items: Vec<Item>,
}

impl Feed {
    pub fn with_first_page(count: usize) -> Self {
        Self {
            items: page(0, count, Utc::now()),
        }
    }

    pub fn replace(&mut self, items: Vec<Item>) {
        self.items = items;
    }

    pub fn append(&mut self, items: Vec<Item>) {
        self.items.extend(items);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn last(&self) -> Option<&Item> {
        self.items.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_continue_numbering() {
        let mut feed = Feed::with_first_page(3);
        feed.append(page(feed.len(), 2, Utc::now()));

        assert_eq!(feed.len(), 5);
        let last = feed.last().unwrap();
        assert_eq!(last.name, "Item 4");
        assert_eq!(last.desc, "Description 4");
    }

    #[test]
    fn replace_resets_to_given_page() {
        let mut feed = Feed::with_first_page(12);
        feed.replace(page(0, 10, Utc::now()));
        assert_eq!(feed.len(), 10);
        assert_eq!(feed.last().unwrap().index, 9);
    }
}
