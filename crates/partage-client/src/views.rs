//! Pure view projections over the listing collection.
//!
//! Each projection filters and sorts for one role and purpose; the
//! filter predicates are the visibility rules deciding what each role
//! gets to see.  Projections are recomputed on demand from the current
//! collection -- no caching, no invalidation.  Debouncing the search
//! input is a front-end concern; `charity_available` itself is
//! synchronous.

use serde::Serialize;

use partage_shared::{ListingStatus, UserId};
use partage_store::Listing;

/// Counts shown in the home snapshot and the stats line.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct MarketStats {
    pub available: usize,
    pub claimed: usize,
    pub total: usize,
}

/// Listings the donor created, newest first.
pub fn donor_history(listings: &[Listing], donor: UserId) -> Vec<Listing> {
    let mut items: Vec<Listing> = listings
        .iter()
        .filter(|l| l.created_by_user_id == donor)
        .cloned()
        .collect();
    items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    items
}

/// Available listings from other donors, soonest expiry first.  Donors
/// may look but never claim.
pub fn donor_marketplace(listings: &[Listing], donor: UserId) -> Vec<Listing> {
    let mut items: Vec<Listing> = listings
        .iter()
        .filter(|l| l.is_available() && l.created_by_user_id != donor)
        .cloned()
        .collect();
    items.sort_by(|a, b| a.expiry_date.cmp(&b.expiry_date));
    items
}

/// Available listings for charities, optionally narrowed by a
/// case-insensitive substring search over description, donor name,
/// location and notes; soonest expiry first.
pub fn charity_available(listings: &[Listing], search: &str) -> Vec<Listing> {
    let query = search.trim().to_lowercase();
    let mut items: Vec<Listing> = listings
        .iter()
        .filter(|l| l.is_available())
        .filter(|l| {
            if query.is_empty() {
                return true;
            }
            let haystack = format!(
                "{} {} {} {}",
                l.food_description, l.donor_name, l.location, l.notes
            )
            .to_lowercase();
            haystack.contains(&query)
        })
        .cloned()
        .collect();
    items.sort_by(|a, b| a.expiry_date.cmp(&b.expiry_date));
    items
}

/// Listings the charity has claimed, newest claim first.
pub fn charity_claimed(listings: &[Listing], charity: UserId) -> Vec<Listing> {
    let mut items: Vec<Listing> = listings
        .iter()
        .filter(|l| l.charity_user_id == Some(charity))
        .cloned()
        .collect();
    items.sort_by(|a, b| b.claimed_at.cmp(&a.claimed_at));
    items
}

/// Count listings by status.
pub fn stats(listings: &[Listing]) -> MarketStats {
    let available = listings.iter().filter(|l| l.is_available()).count();
    let claimed = listings
        .iter()
        .filter(|l| l.status == ListingStatus::Claimed)
        .count();
    MarketStats {
        available,
        claimed,
        total: listings.len(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use partage_shared::ListingId;

    use super::*;

    fn listing(donor: UserId, description: &str, expiry: &str) -> Listing {
        Listing {
            id: ListingId::new(),
            donor_name: "Cantine Verte".into(),
            donor_type: "Restaurant".into(),
            donor_user_id: donor,
            food_description: description.into(),
            quantity: "4 boxes".into(),
            expiry_date: expiry.into(),
            pickup_window: "12:00-14:00".into(),
            location: "Montreuil".into(),
            notes: String::new(),
            image_ref: None,
            created_by_user_id: donor,
            created_at: Utc::now(),
            status: ListingStatus::Available,
            charity_user_id: None,
            charity_name: String::new(),
            claimed_at: None,
            donor_ack: false,
            charity_ack: false,
            chat: Vec::new(),
        }
    }

    fn claimed_by(mut l: Listing, charity: UserId, claimed_at: chrono::DateTime<Utc>) -> Listing {
        l.status = ListingStatus::Claimed;
        l.charity_user_id = Some(charity);
        l.charity_name = "Refuge".into();
        l.claimed_at = Some(claimed_at);
        l
    }

    #[test]
    fn donor_history_is_own_listings_newest_first() {
        let donor = UserId::new();
        let other = UserId::new();

        let mut old = listing(donor, "Soup", "2026-08-10");
        old.created_at = Utc::now() - Duration::hours(2);
        let recent = listing(donor, "Bread", "2026-08-09");
        let foreign = listing(other, "Rice", "2026-08-08");

        let history = donor_history(&[old.clone(), recent.clone(), foreign], donor);
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].id, recent.id);
        assert_eq!(history[1].id, old.id);
    }

    #[test]
    fn donor_marketplace_excludes_own_and_claimed_listings() {
        let donor = UserId::new();
        let other = UserId::new();
        let charity = UserId::new();

        let own = listing(donor, "Soup", "2026-08-01");
        let later = listing(other, "Rice", "2026-08-15");
        let sooner = listing(other, "Bread", "2026-08-02");
        let taken = claimed_by(listing(other, "Cake", "2026-08-03"), charity, Utc::now());

        let market = donor_marketplace(&[own, later.clone(), sooner.clone(), taken], donor);
        assert_eq!(market.len(), 2);
        // Soonest expiry first.
        assert_eq!(market[0].id, sooner.id);
        assert_eq!(market[1].id, later.id);
    }

    #[test]
    fn empty_search_returns_every_available_listing() {
        let donor = UserId::new();
        let charity = UserId::new();
        let listings = vec![
            listing(donor, "Soup", "2026-08-02"),
            listing(donor, "Bread", "2026-08-01"),
            claimed_by(listing(donor, "Cake", "2026-08-03"), charity, Utc::now()),
        ];

        let all_available = charity_available(&listings, "");
        assert_eq!(all_available.len(), 2);
        assert!(all_available.iter().all(|l| l.is_available()));
        // Same set as filtering by status directly.
        assert_eq!(charity_available(&listings, "  ").len(), 2);
    }

    #[test]
    fn search_is_a_case_insensitive_substring_over_all_text_fields() {
        let donor = UserId::new();
        let mut by_notes = listing(donor, "Soup", "2026-08-02");
        by_notes.notes = "Halal certified".into();
        let mut by_location = listing(donor, "Bread", "2026-08-01");
        by_location.location = "Vincennes".into();
        let listings = vec![by_notes.clone(), by_location.clone()];

        let hits = charity_available(&listings, "HALAL");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, by_notes.id);

        let hits = charity_available(&listings, "vincen");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, by_location.id);

        assert!(charity_available(&listings, "quiche").is_empty());

        // Every hit is a subset of the unfiltered projection.
        let all: Vec<ListingId> = charity_available(&listings, "").iter().map(|l| l.id).collect();
        assert!(charity_available(&listings, "bread")
            .iter()
            .all(|l| all.contains(&l.id)));
    }

    #[test]
    fn charity_claimed_is_own_claims_newest_first() {
        let donor = UserId::new();
        let charity = UserId::new();
        let rival = UserId::new();

        let early = claimed_by(
            listing(donor, "Soup", "2026-08-02"),
            charity,
            Utc::now() - Duration::hours(1),
        );
        let late = claimed_by(listing(donor, "Bread", "2026-08-01"), charity, Utc::now());
        let foreign = claimed_by(listing(donor, "Cake", "2026-08-03"), rival, Utc::now());

        let mine = charity_claimed(&[early.clone(), late.clone(), foreign], charity);
        assert_eq!(mine.len(), 2);
        assert_eq!(mine[0].id, late.id);
        assert_eq!(mine[1].id, early.id);
    }

    #[test]
    fn stats_count_by_status() {
        let donor = UserId::new();
        let charity = UserId::new();
        let listings = vec![
            listing(donor, "Soup", "2026-08-02"),
            listing(donor, "Bread", "2026-08-01"),
            claimed_by(listing(donor, "Cake", "2026-08-03"), charity, Utc::now()),
        ];

        let s = stats(&listings);
        assert_eq!(s.available, 2);
        assert_eq!(s.claimed, 1);
        assert_eq!(s.total, 3);

        assert_eq!(stats(&[]), MarketStats { available: 0, claimed: 0, total: 0 });
    }
}
