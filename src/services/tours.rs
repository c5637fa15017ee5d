use std::sync::{Mutex, MutexGuard};

use chrono::{NaiveDateTime, Utc};
use thiserror::Error;

use crate::models::{ScheduleTourRequest, Tour, TourStatus, UpdateTourRequest};

/// Errors that can occur when working with scheduled tours
#[derive(Debug, Error)]
pub enum TourError {
    #[error("Tour not found: {0}")]
    NotFound(u32),
}

struct TourBookInner {
    tours: Vec<Tour>,
    next_id: u32,
}

/// In-process book of scheduled tours
///
/// A separate store from the listing catalog; the search core never
/// touches it. Newest bookings sit at the front, matching how the tours
/// page lists them.
pub struct TourBook {
    inner: Mutex<TourBookInner>,
}

impl TourBook {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(TourBookInner {
                tours: Vec::new(),
                next_id: 1,
            }),
        }
    }

    fn book(&self) -> MutexGuard<'_, TourBookInner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Schedule a new tour
    pub fn create(&self, req: ScheduleTourRequest) -> Tour {
        let mut book = self.book();
        let now = Utc::now();

        let tour = Tour {
            id: book.next_id,
            listing_id: req.listing_id,
            name: req.name,
            email: req.email,
            phone: req.phone,
            date: req.date,
            time_slot: req.time_slot,
            tour_type: req.tour_type,
            special_requests: req.special_requests,
            status: TourStatus::Scheduled,
            created_at: now,
            updated_at: now,
        };

        book.next_id += 1;
        book.tours.insert(0, tour.clone());

        tracing::debug!("Scheduled tour {} for listing {}", tour.id, tour.listing_id);

        tour
    }

    pub fn all(&self) -> Vec<Tour> {
        self.book().tours.clone()
    }

    pub fn get(&self, id: u32) -> Result<Tour, TourError> {
        self.book()
            .tours
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or(TourError::NotFound(id))
    }

    /// Apply a partial update; absent fields keep their current value
    pub fn update(&self, id: u32, req: UpdateTourRequest) -> Result<Tour, TourError> {
        let mut book = self.book();
        let tour = book
            .tours
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(TourError::NotFound(id))?;

        if let Some(date) = req.date {
            tour.date = date;
        }
        if let Some(time_slot) = req.time_slot {
            tour.time_slot = time_slot;
        }
        if let Some(tour_type) = req.tour_type {
            tour.tour_type = tour_type;
        }
        if let Some(special_requests) = req.special_requests {
            tour.special_requests = Some(special_requests);
        }
        tour.updated_at = Utc::now();

        Ok(tour.clone())
    }

    /// Mark a tour as cancelled, keeping its record
    pub fn cancel(&self, id: u32) -> Result<Tour, TourError> {
        let mut book = self.book();
        let tour = book
            .tours
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(TourError::NotFound(id))?;

        tour.status = TourStatus::Cancelled;
        tour.updated_at = Utc::now();

        Ok(tour.clone())
    }

    pub fn delete(&self, id: u32) -> Result<(), TourError> {
        let mut book = self.book();
        let index = book
            .tours
            .iter()
            .position(|t| t.id == id)
            .ok_or(TourError::NotFound(id))?;
        book.tours.remove(index);
        Ok(())
    }

    /// Tours still scheduled and starting after `now`, soonest first
    pub fn upcoming(&self, now: NaiveDateTime) -> Vec<Tour> {
        let mut tours: Vec<Tour> = self
            .book()
            .tours
            .iter()
            .filter(|t| t.status == TourStatus::Scheduled && t.starts_at() > now)
            .cloned()
            .collect();
        tours.sort_by_key(Tour::starts_at);
        tours
    }

    /// All tours booked against one listing
    pub fn by_listing(&self, listing_id: u32) -> Vec<Tour> {
        self.book()
            .tours
            .iter()
            .filter(|t| t.listing_id == listing_id)
            .cloned()
            .collect()
    }
}

impl Default for TourBook {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TourType;
    use chrono::NaiveDate;

    fn schedule_request(listing_id: u32, date: (i32, u32, u32), time_slot: &str) -> ScheduleTourRequest {
        ScheduleTourRequest {
            listing_id,
            name: "Jordan Reyes".to_string(),
            email: "jordan@example.com".to_string(),
            phone: Some("555-0100".to_string()),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            time_slot: time_slot.to_string(),
            tour_type: TourType::InPerson,
            special_requests: None,
        }
    }

    #[test]
    fn test_create_assigns_sequential_ids_newest_first() {
        let book = TourBook::new();

        let first = book.create(schedule_request(10, (2026, 1, 5), "09:00"));
        let second = book.create(schedule_request(11, (2026, 1, 6), "10:00"));

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);

        let all = book.all();
        assert_eq!(all[0].id, 2);
        assert_eq!(all[1].id, 1);
    }

    #[test]
    fn test_cancel_flips_status_and_hides_from_upcoming() {
        let book = TourBook::new();
        let tour = book.create(schedule_request(10, (2099, 6, 1), "09:00"));

        let now = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap().and_hms_opt(12, 0, 0).unwrap();
        assert_eq!(book.upcoming(now).len(), 1);

        let cancelled = book.cancel(tour.id).unwrap();
        assert_eq!(cancelled.status, TourStatus::Cancelled);
        assert!(book.upcoming(now).is_empty());
    }

    #[test]
    fn test_upcoming_sorted_soonest_first_and_excludes_past() {
        let book = TourBook::new();
        book.create(schedule_request(1, (2026, 3, 10), "14:00"));
        book.create(schedule_request(2, (2026, 3, 10), "09:00"));
        book.create(schedule_request(3, (2020, 1, 1), "09:00"));

        let now = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
        let upcoming = book.upcoming(now);

        let listing_ids: Vec<u32> = upcoming.iter().map(|t| t.listing_id).collect();
        assert_eq!(listing_ids, vec![2, 1]);
    }

    #[test]
    fn test_update_unknown_tour_is_not_found() {
        let book = TourBook::new();
        let result = book.update(
            42,
            UpdateTourRequest {
                date: None,
                time_slot: Some("11:00".to_string()),
                tour_type: None,
                special_requests: None,
            },
        );
        assert!(matches!(result, Err(TourError::NotFound(42))));
    }

    #[test]
    fn test_delete_removes_record() {
        let book = TourBook::new();
        let tour = book.create(schedule_request(1, (2026, 2, 2), "09:00"));

        book.delete(tour.id).unwrap();
        assert!(matches!(book.get(tour.id), Err(TourError::NotFound(_))));
        assert!(matches!(book.delete(tour.id), Err(TourError::NotFound(_))));
    }

    #[test]
    fn test_by_listing_filters() {
        let book = TourBook::new();
        book.create(schedule_request(7, (2026, 2, 2), "09:00"));
        book.create(schedule_request(8, (2026, 2, 3), "09:00"));
        book.create(schedule_request(7, (2026, 2, 4), "09:00"));

        assert_eq!(book.by_listing(7).len(), 2);
        assert_eq!(book.by_listing(9).len(), 0);
    }
}
