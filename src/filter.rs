// Portfolio category filter. The item catalog is parsed once at
// construction; each filter click maps to reveal/conceal decisions.
// See steering.md: Interaction Rules

use crate::types::{Directive, ProjectSpec};

/// Label that matches every item.
const SHOW_ALL: &str = "all";

/// Filters portfolio items by category label.
#[derive(Debug)]
pub struct ProjectFilter {
    /// Category tokens per item, trimmed, in DOM order.
    items: Vec<Vec<String>>,
    conceal_ms: u32,
}

impl ProjectFilter {
    pub fn new(specs: &[ProjectSpec], conceal_ms: u32) -> Self {
        let items = specs
            .iter()
            .map(|spec| {
                spec.categories
                    .split(',')
                    .map(str::trim)
                    .filter(|token| !token.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .collect();
        ProjectFilter { items, conceal_ms }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Directives for one filter selection: mark the control active, then
    /// reveal matching items and conceal the rest.
    pub fn apply(&self, label: &str) -> Vec<Directive> {
        let label = label.trim();
        let mut directives = Vec::with_capacity(self.items.len() + 1);
        directives.push(Directive::SetActiveFilter {
            label: label.to_string(),
        });

        for (index, categories) in self.items.iter().enumerate() {
            if self.matches(categories, label) {
                directives.push(Directive::RevealItem { index });
            } else {
                directives.push(Directive::ConcealItem {
                    index,
                    remove_after_ms: self.conceal_ms,
                });
            }
        }
        directives
    }

    fn matches(&self, categories: &[String], label: &str) -> bool {
        label == SHOW_ALL || categories.iter().any(|category| category == label)
    }
}
