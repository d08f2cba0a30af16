use itertools::Itertools;
use rand::{seq::SliceRandom, Rng};
use skate_contest_entities::{prelude::*, utilities::random_uuid};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum HeatDrawError {
    #[error("Heat size for round {0:?} must be positive")]
    ZeroHeatSize(HeatRound),
    #[error("Number of advancing riders per heat must be positive")]
    ZeroQualifiers,
}

/// Splits `participants` into consecutive heats of at most `heat_size`.
/// Order is kept and the last heat takes the remainder.
pub fn partition_into_heats<R: Rng + ?Sized>(
    participants: &[Uuid],
    heat_size: usize,
    category: &Category,
    round: HeatRound,
    rng: &mut R,
) -> Result<Vec<Heat>, HeatDrawError> {
    if heat_size == 0 {
        return Err(HeatDrawError::ZeroHeatSize(round));
    }

    Ok(participants
        .chunks(heat_size)
        .map(|chunk| Heat::new(random_uuid(&mut *rng), category.clone(), chunk.to_vec(), round))
        .collect())
}

/// The first `count` riders of every heat, heat by heat.
pub fn take_qualifiers(heats: &[Heat], count: usize) -> Vec<Uuid> {
    heats
        .iter()
        .flat_map(|h| h.participants.iter().take(count))
        .copied()
        .collect_vec()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bracket {
    pub first_round: Vec<Heat>,
    pub second_round: Vec<Heat>,
    pub final_heat: Heat,
}

impl Bracket {
    pub fn into_heats(self) -> Vec<Heat> {
        self.first_round
            .into_iter()
            .chain(self.second_round)
            .chain(std::iter::once(self.final_heat))
            .collect()
    }
}

/// Seeds a three round bracket for one category.
///
/// Qualification is positional: heats are drawn before any run is scored,
/// so the riders that advance are simply the first ones of each heat after
/// the shuffle.
pub struct HeatGenerator {
    pub config: HeatConfig,
}

impl HeatGenerator {
    pub fn new(config: HeatConfig) -> Self {
        HeatGenerator { config }
    }

    pub fn generate<R: Rng + ?Sized>(
        &self,
        category: &Category,
        participants: Vec<Uuid>,
        rng: &mut R,
    ) -> Result<Bracket, HeatDrawError> {
        if self.config.second_round_qualifiers == 0 || self.config.finalists == 0 {
            return Err(HeatDrawError::ZeroQualifiers);
        }

        let mut shuffled = participants;
        shuffled.shuffle(rng);

        let first_round = partition_into_heats(
            &shuffled,
            self.config.first_round_size as usize,
            category,
            HeatRound::First,
            rng,
        )?;

        let qualifiers = take_qualifiers(&first_round, self.config.second_round_qualifiers as usize);
        let second_round = partition_into_heats(
            &qualifiers,
            self.config.second_round_size as usize,
            category,
            HeatRound::Second,
            rng,
        )?;

        let finalists = take_qualifiers(&second_round, self.config.finalists as usize);
        let final_heat = Heat::new(random_uuid(rng), category.clone(), finalists, HeatRound::Final);

        Ok(Bracket {
            first_round,
            second_round,
            final_heat,
        })
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashSet;

    use itertools::Itertools;
    use rand::{rngs::StdRng, SeedableRng};
    use skate_contest_entities::prelude::*;

    use super::{partition_into_heats, take_qualifiers, HeatDrawError, HeatGenerator};

    fn riders(n: u128) -> Vec<Uuid> {
        (0..n).map(|i| Uuid::from_u128(1000 + i)).collect()
    }

    #[test]
    fn test_partition_keeps_order_and_remainder() {
        let mut rng = StdRng::seed_from_u64(1);
        let heats = partition_into_heats(&riders(7), 3, &Category::girls(), HeatRound::First, &mut rng).unwrap();

        assert_eq!(heats.len(), 3);
        assert_eq!(heats[0].participants, riders(3));
        assert_eq!(heats[2].participants, vec![Uuid::from_u128(1006)]);
        assert!(heats.iter().all(|h| h.round == HeatRound::First && h.status == HeatStatus::Pending));
    }

    #[test]
    fn test_partition_of_empty_input_has_no_heats() {
        let mut rng = StdRng::seed_from_u64(1);
        let heats = partition_into_heats(&[], 5, &Category::girls(), HeatRound::Second, &mut rng).unwrap();
        assert!(heats.is_empty());
    }

    #[test]
    fn test_partition_rejects_zero_size() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            partition_into_heats(&riders(3), 0, &Category::girls(), HeatRound::Second, &mut rng),
            Err(HeatDrawError::ZeroHeatSize(HeatRound::Second))
        );
    }

    #[test]
    fn test_generator_rejects_zero_advancing_riders() {
        let mut rng = StdRng::seed_from_u64(1);
        for config in [
            HeatConfig { finalists: 0, ..Default::default() },
            HeatConfig { second_round_qualifiers: 0, ..Default::default() },
        ] {
            assert_eq!(
                HeatGenerator::new(config).generate(&Category::girls(), riders(6), &mut rng),
                Err(HeatDrawError::ZeroQualifiers)
            );
        }
    }

    #[test]
    fn test_qualifiers_are_taken_from_front_of_each_heat() {
        let mut rng = StdRng::seed_from_u64(1);
        let heats = partition_into_heats(&riders(8), 3, &Category::girls(), HeatRound::First, &mut rng).unwrap();

        assert_eq!(
            take_qualifiers(&heats, 2),
            vec![1000, 1001, 1003, 1004, 1006, 1007].into_iter().map(Uuid::from_u128).collect_vec()
        );
    }

    #[test]
    fn test_first_round_heat_counts_for_all_sizes() {
        for k in 0..40u128 {
            for s in 1..8u32 {
                let mut rng = StdRng::seed_from_u64(k as u64 * 31 + s as u64);
                let generator = HeatGenerator::new(HeatConfig {
                    first_round_size: s,
                    ..Default::default()
                });
                let bracket = generator.generate(&Category::amateur(), riders(k), &mut rng).unwrap();

                let expected_heats = (k as usize + s as usize - 1) / s as usize;
                assert_eq!(bracket.first_round.len(), expected_heats);
                assert_eq!(
                    bracket.first_round.iter().map(|h| h.participants.len()).sum::<usize>(),
                    k as usize
                );
            }
        }
    }

    #[test]
    fn test_default_bracket_for_twelve_riders() {
        let mut rng = StdRng::seed_from_u64(42);
        let bracket = HeatGenerator::new(HeatConfig::default())
            .generate(&Category::amateur(), riders(12), &mut rng)
            .unwrap();

        // 5 + 5 + 2 riders, 3 + 3 + 2 qualify, heats of 2, one finalist each
        assert_eq!(bracket.first_round.iter().map(|h| h.participants.len()).collect_vec(), vec![5, 5, 2]);
        assert_eq!(bracket.second_round.len(), 4);
        assert_eq!(bracket.final_heat.participants.len(), 4);
        assert_eq!(bracket.final_heat.round, HeatRound::Final);

        let all_riders: HashSet<_> = riders(12).into_iter().collect();
        let first_round_riders: HashSet<_> = bracket.first_round.iter().flat_map(|h| h.participants.iter().copied()).collect();
        assert_eq!(first_round_riders, all_riders);
    }

    #[test]
    fn test_second_round_is_drawn_from_first_round_positions() {
        let mut rng = StdRng::seed_from_u64(3);
        let bracket = HeatGenerator::new(HeatConfig::default())
            .generate(&Category::girls(), riders(11), &mut rng)
            .unwrap();

        let qualifiers = take_qualifiers(&bracket.first_round, 3);
        let second_round_riders = bracket.second_round.iter().flat_map(|h| h.participants.iter().copied()).collect_vec();
        assert_eq!(second_round_riders, qualifiers);
        assert_eq!(bracket.final_heat.participants, take_qualifiers(&bracket.second_round, 1));
    }

    #[test]
    fn test_empty_pool_still_has_final_heat() {
        let mut rng = StdRng::seed_from_u64(3);
        let heats = HeatGenerator::new(HeatConfig::default())
            .generate(&Category::girls(), vec![], &mut rng)
            .unwrap()
            .into_heats();

        assert_eq!(heats.len(), 1);
        assert_eq!(heats[0].round, HeatRound::Final);
        assert!(heats[0].participants.is_empty());
    }

    #[test]
    fn test_same_seed_gives_same_bracket() {
        let generator = HeatGenerator::new(HeatConfig::default());
        let first = generator
            .generate(&Category::girls(), riders(17), &mut StdRng::seed_from_u64(99))
            .unwrap();
        let second = generator
            .generate(&Category::girls(), riders(17), &mut StdRng::seed_from_u64(99))
            .unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_heat_ids_are_unique() {
        let mut rng = StdRng::seed_from_u64(5);
        let heats = HeatGenerator::new(HeatConfig { first_round_size: 2, ..Default::default() })
            .generate(&Category::girls(), riders(20), &mut rng)
            .unwrap()
            .into_heats();

        assert_eq!(heats.iter().map(|h| h.uuid).unique().count(), heats.len());
    }
}
