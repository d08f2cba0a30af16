use itertools::Itertools;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use super::category::Category;

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub house_number: String,
    pub postal_code: String,
    pub city: String,
}

impl Address {
    pub fn formatted(&self) -> String {
        format!(
            "{} {}, {} {}",
            self.street, self.house_number, self.postal_code, self.city
        )
    }
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub uuid: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address: Address,
    pub is_sponsored: bool,
    pub sponsor_details: Option<String>,
    pub categories: Vec<Category>,
    /// Always a subset of `categories`.
    pub paid_categories: Vec<Category>,
    pub start_number: u32,
    pub access_code: String,
}

/// Partial participant edit. `None` leaves a field untouched.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantUpdate {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub is_sponsored: Option<bool>,
    /// `null` clears the sponsor text, a missing field keeps it.
    #[serde(default, deserialize_with = "deserialize_present")]
    pub sponsor_details: Option<Option<String>>,
    #[serde(default)]
    pub categories: Option<Vec<Category>>,
}

fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl Participant {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn sponsor(&self) -> Option<&str> {
        if self.is_sponsored {
            self.sponsor_details.as_deref().filter(|s| !s.is_empty())
        } else {
            None
        }
    }

    pub fn display_name(&self) -> String {
        match self.sponsor() {
            Some(sponsor) => format!("{} (Sponsored by: {})", self.full_name(), sponsor),
            None => self.full_name(),
        }
    }

    pub fn is_enrolled_in(&self, category: &Category) -> bool {
        self.categories.contains(category)
    }

    pub fn has_paid_for(&self, category: &Category) -> bool {
        self.paid_categories.contains(category)
    }

    pub fn unpaid_categories(&self) -> Vec<&Category> {
        self.categories
            .iter()
            .filter(|c| !self.paid_categories.contains(c))
            .collect()
    }

    /// Applies `update` and drops payment for any category the participant
    /// is no longer enrolled in.
    pub fn merged(&self, update: ParticipantUpdate) -> Participant {
        let mut participant = self.clone();
        if let Some(first_name) = update.first_name {
            participant.first_name = first_name;
        }
        if let Some(last_name) = update.last_name {
            participant.last_name = last_name;
        }
        if let Some(email) = update.email {
            participant.email = email;
        }
        if let Some(address) = update.address {
            participant.address = address;
        }
        if let Some(is_sponsored) = update.is_sponsored {
            participant.is_sponsored = is_sponsored;
        }
        if let Some(sponsor_details) = update.sponsor_details {
            participant.sponsor_details = sponsor_details;
        }
        if let Some(categories) = update.categories {
            participant.categories = categories.into_iter().unique().collect();
        }
        let categories = participant.categories.clone();
        participant.paid_categories.retain(|c| categories.contains(c));
        participant
    }

    pub fn revoked_payments(&self, updated: &Participant) -> Vec<Category> {
        self.paid_categories
            .iter()
            .filter(|c| !updated.paid_categories.contains(c))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn participant() -> Participant {
        Participant {
            uuid: Uuid::from_u128(1000),
            first_name: "Tony".into(),
            last_name: "Hawk".into(),
            email: "tony@example.com".into(),
            address: Address {
                street: "Rampweg".into(),
                house_number: "9".into(),
                postal_code: "12345".into(),
                city: "Berlin".into(),
            },
            is_sponsored: true,
            sponsor_details: Some("Birdhouse".into()),
            categories: vec![Category::sponsored(), Category::miniramp()],
            paid_categories: vec![Category::sponsored(), Category::miniramp()],
            start_number: 1,
            access_code: "ABC234".into(),
        }
    }

    #[test]
    fn test_display_name_includes_sponsor() {
        assert_eq!(participant().display_name(), "Tony Hawk (Sponsored by: Birdhouse)");

        let mut unsponsored = participant();
        unsponsored.is_sponsored = false;
        assert_eq!(unsponsored.display_name(), "Tony Hawk");
    }

    #[test]
    fn test_formatted_address() {
        assert_eq!(participant().address.formatted(), "Rampweg 9, 12345 Berlin");
    }

    #[test]
    fn test_removing_category_revokes_payment() {
        let original = participant();
        let updated = original.merged(ParticipantUpdate {
            categories: Some(vec![Category::sponsored()]),
            ..Default::default()
        });

        assert_eq!(updated.categories, vec![Category::sponsored()]);
        assert_eq!(updated.paid_categories, vec![Category::sponsored()]);
        assert_eq!(original.revoked_payments(&updated), vec![Category::miniramp()]);
    }

    #[test]
    fn test_name_update_keeps_payments() {
        let original = participant();
        let updated = original.merged(ParticipantUpdate {
            first_name: Some("Anthony".into()),
            ..Default::default()
        });

        assert_eq!(updated.first_name, "Anthony");
        assert_eq!(updated.paid_categories, original.paid_categories);
        assert!(original.revoked_payments(&updated).is_empty());
    }
}
