//! Pane Registry
//!
//! Ordered collection of the panes hosted by one settings window.
//! Invariants: never empty, identifiers unique and non-blank.

use std::collections::HashSet;

use crate::error::PaneError;
use crate::pane::{PaneConvertible, PaneDescriptor, PaneIdentifier};
use crate::Result;

#[derive(Debug)]
pub struct PaneRegistry {
    panes: Vec<PaneDescriptor>,
}

impl PaneRegistry {
    pub fn new(panes: Vec<PaneDescriptor>) -> Result<Self> {
        if panes.is_empty() {
            return Err(PaneError::Empty);
        }

        let mut seen = HashSet::with_capacity(panes.len());
        for pane in &panes {
            validate_identifier(pane.identifier())?;
            if !seen.insert(pane.identifier()) {
                return Err(PaneError::DuplicateIdentifier(
                    pane.identifier().to_string(),
                ));
            }
        }

        tracing::debug!(pane_count = panes.len(), "Built pane registry");

        Ok(Self { panes })
    }

    /// Build from lightweight pane descriptions, converting each exactly once
    pub fn from_convertible<I, P>(panes: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: PaneConvertible,
    {
        Self::new(
            panes
                .into_iter()
                .map(PaneConvertible::into_pane_descriptor)
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.panes.len()
    }

    /// A registry never drops below one pane, so this is false
    pub fn is_empty(&self) -> bool {
        self.panes.is_empty()
    }

    pub fn get(&self, identifier: &PaneIdentifier) -> Option<&PaneDescriptor> {
        self.panes.iter().find(|p| p.identifier() == identifier)
    }

    pub fn get_index(&self, index: usize) -> Option<&PaneDescriptor> {
        self.panes.get(index)
    }

    /// Display index and descriptor of a pane
    pub fn find(&self, identifier: &PaneIdentifier) -> Option<(usize, &PaneDescriptor)> {
        self.panes
            .iter()
            .enumerate()
            .find(|(_, p)| p.identifier() == identifier)
    }

    pub fn index_of(&self, identifier: &PaneIdentifier) -> Option<usize> {
        self.panes.iter().position(|p| p.identifier() == identifier)
    }

    pub fn contains(&self, identifier: &PaneIdentifier) -> bool {
        self.index_of(identifier).is_some()
    }

    /// The pane shown when nothing has been persisted yet
    pub fn first(&self) -> &PaneDescriptor {
        &self.panes[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = &PaneDescriptor> {
        self.panes.iter()
    }

    /// Append a pane at the end of the display order
    pub fn append(&mut self, pane: PaneDescriptor) -> Result<()> {
        validate_identifier(pane.identifier())?;
        if self.contains(pane.identifier()) {
            return Err(PaneError::DuplicateIdentifier(
                pane.identifier().to_string(),
            ));
        }

        tracing::info!(pane = %pane.identifier(), "Appended pane");
        self.panes.push(pane);
        Ok(())
    }

    /// Remove a pane. The registry never becomes empty.
    pub fn remove(&mut self, identifier: &PaneIdentifier) -> Result<PaneDescriptor> {
        let index = self
            .index_of(identifier)
            .ok_or_else(|| PaneError::NotFound(identifier.to_string()))?;

        if self.panes.len() <= 1 {
            return Err(PaneError::CannotRemoveLastPane);
        }

        tracing::info!(pane = %identifier, "Removed pane");
        Ok(self.panes.remove(index))
    }
}

fn validate_identifier(identifier: &PaneIdentifier) -> Result<()> {
    if identifier.as_str().trim().is_empty() {
        return Err(PaneError::InvalidIdentifier(identifier.to_string()));
    }
    Ok(())
}
