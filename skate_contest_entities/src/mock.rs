use faker_rand::en_us::{company::CompanyName, names::{FirstName, LastName}};
use rand::{seq::SliceRandom, Rng};
use uuid::Uuid;

use crate::{
    domain::{
        category::Category,
        heat_config::ContestCategory,
        participant::{Address, Participant},
    },
    group::{Entity, EntityGroup},
    utilities::random_uuid,
};

#[derive(Debug)]
pub struct MockOption {
    pub deterministic_uuids: bool,
    pub num_participants: u32,
    pub use_random_names: bool,
    /// Mark every enrolled category as paid.
    pub pay_all: bool,
}

impl Default for MockOption {
    fn default() -> Self {
        Self {
            deterministic_uuids: false,
            num_participants: 24,
            use_random_names: false,
            pay_all: true,
        }
    }
}

pub fn make_mock_contest<R: Rng>(rng: &mut R) -> EntityGroup {
    make_mock_contest_with_options(Default::default(), rng)
}

pub fn make_mock_contest_with_options<R: Rng>(options: MockOption, rng: &mut R) -> EntityGroup {
    /*
    Participants: 1000
    */
    let mut groups = EntityGroup::new();

    for category in Category::built_ins() {
        groups.add(Entity::ContestCategory(ContestCategory::new(category)));
    }

    for idx in 0..options.num_participants {
        let uuid = if options.deterministic_uuids {
            Uuid::from_u128(1000 + idx as u128)
        } else {
            random_uuid(rng)
        };

        let (first_name, last_name) = if options.use_random_names {
            (rng.gen::<FirstName>().to_string(), rng.gen::<LastName>().to_string())
        } else {
            ("Rider".to_string(), format!("{}", idx + 1))
        };

        let is_sponsored = rng.gen_bool(0.5);
        let mut categories = vec![];
        if is_sponsored {
            categories.push(Category::sponsored());
        }
        let open_categories = if is_sponsored {
            vec![Category::miniramp(), Category::girls()]
        } else {
            vec![Category::amateur(), Category::miniramp(), Category::girls()]
        };
        categories.extend(open_categories.into_iter().filter(|_| rng.gen_bool(0.5)));
        if categories.is_empty() {
            categories.push(
                [Category::amateur(), Category::miniramp()]
                    .choose(rng)
                    .cloned()
                    .unwrap_or_else(Category::amateur),
            );
        }

        let sponsor_details = if is_sponsored {
            Some(rng.gen::<CompanyName>().to_string())
        } else {
            None
        };

        groups.add(Entity::Participant(Participant {
            uuid,
            email: format!("rider{}@example.com", idx + 1),
            first_name,
            last_name,
            address: Address {
                street: "Bowl Street".into(),
                house_number: format!("{}", idx + 1),
                postal_code: "10115".into(),
                city: "Berlin".into(),
            },
            is_sponsored,
            sponsor_details,
            paid_categories: if options.pay_all { categories.clone() } else { vec![] },
            categories,
            start_number: idx + 1,
            access_code: format!("M{:05}", idx + 1),
        }));
    }

    groups
}
