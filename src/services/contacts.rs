use std::sync::{Mutex, MutexGuard};

use chrono::Utc;
use thiserror::Error;

use crate::models::{ContactAgentRequest, ContactRequest, ContactStatus};

/// Errors that can occur when working with contact requests
#[derive(Debug, Error)]
pub enum ContactError {
    #[error("Contact request not found: {0}")]
    NotFound(u32),
}

struct ContactBookInner {
    contacts: Vec<ContactRequest>,
    next_id: u32,
}

/// In-process book of agent contact requests
///
/// Like tours, a store of its own: created by the contact form, never
/// filtered or queried by the listing search core.
pub struct ContactBook {
    inner: Mutex<ContactBookInner>,
}

impl ContactBook {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(ContactBookInner {
                contacts: Vec::new(),
                next_id: 1,
            }),
        }
    }

    fn book(&self) -> MutexGuard<'_, ContactBookInner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// File a new contact request, status Pending
    pub fn create(&self, req: ContactAgentRequest) -> ContactRequest {
        let mut book = self.book();
        let now = Utc::now();

        let contact = ContactRequest {
            id: book.next_id,
            listing_id: req.listing_id,
            name: req.name,
            email: req.email,
            phone: req.phone,
            message: req.message,
            status: ContactStatus::Pending,
            created_at: now,
            updated_at: now,
        };

        book.next_id += 1;
        book.contacts.insert(0, contact.clone());

        tracing::debug!(
            "Filed contact request {} for listing {}",
            contact.id,
            contact.listing_id
        );

        contact
    }

    pub fn all(&self) -> Vec<ContactRequest> {
        self.book().contacts.clone()
    }

    pub fn get(&self, id: u32) -> Result<ContactRequest, ContactError> {
        self.book()
            .contacts
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(ContactError::NotFound(id))
    }

    pub fn update_status(
        &self,
        id: u32,
        status: ContactStatus,
    ) -> Result<ContactRequest, ContactError> {
        let mut book = self.book();
        let contact = book
            .contacts
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(ContactError::NotFound(id))?;

        contact.status = status;
        contact.updated_at = Utc::now();

        Ok(contact.clone())
    }

    pub fn delete(&self, id: u32) -> Result<(), ContactError> {
        let mut book = self.book();
        let index = book
            .contacts
            .iter()
            .position(|c| c.id == id)
            .ok_or(ContactError::NotFound(id))?;
        book.contacts.remove(index);
        Ok(())
    }

    pub fn by_listing(&self, listing_id: u32) -> Vec<ContactRequest> {
        self.book()
            .contacts
            .iter()
            .filter(|c| c.listing_id == listing_id)
            .cloned()
            .collect()
    }
}

impl Default for ContactBook {
    fn default() -> Self {
        Self::new()
    }
}
