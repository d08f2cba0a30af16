use itertools::Itertools;
use rand::Rng;
use skate_contest_entities::{prelude::*, utilities::random_uuid};

use serde::{Serialize, Deserialize};

use crate::{access_code::generate_unique_access_code, errors::ContestError, registration::RegistrationData};

use super::ActionTrait;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddParticipantAction {
    pub registration: RegistrationData,
}

impl ActionTrait for AddParticipantAction {
    fn get_changes<R: Rng + ?Sized>(self, state: &ContestState, rng: &mut R) -> Result<EntityGroup, anyhow::Error> {
        self.registration.validate()?;
        let registration = self.registration;

        let access_code = match registration.access_code {
            Some(code) => {
                if state.is_access_code_taken(&code) {
                    return Err(ContestError::DuplicateAccessCode(code).into());
                }
                code
            },
            None => generate_unique_access_code(&mut *rng, |c| state.is_access_code_taken(c))
                .ok_or(ContestError::AccessCodeSpaceExhausted)?,
        };

        let categories = registration.categories.into_iter().unique().collect();

        let participant = Participant {
            uuid: random_uuid(rng),
            first_name: registration.first_name,
            last_name: registration.last_name,
            email: registration.email,
            address: registration.address,
            is_sponsored: registration.is_sponsored,
            sponsor_details: registration.sponsor_details,
            categories,
            paid_categories: vec![],
            start_number: state.next_start_number(),
            access_code,
        };

        Ok(EntityGroup::new_with_entities(vec![Entity::Participant(participant)]))
    }
}
