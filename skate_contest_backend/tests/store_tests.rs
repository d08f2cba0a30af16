use assert_matches::assert_matches;
use skate_contest_backend::{actions::*, errors::ContestError, ContestStore};
use skate_contest_entities::{
    mock::{make_mock_contest_with_options, MockOption},
    prelude::*,
};
use rand::{rngs::StdRng, SeedableRng};

fn set_up_store() -> ContestStore {
    let group = make_mock_contest_with_options(
        MockOption {
            deterministic_uuids: true,
            num_participants: 10,
            pay_all: false,
            ..Default::default()
        },
        &mut StdRng::seed_from_u64(21),
    );
    ContestStore::new_with_seed(ContestState::new().apply(&group), 21)
}

fn toggle(participant_id: Uuid, category: Category) -> Action {
    Action::ToggleCategoryPayment { action: ToggleCategoryPaymentAction { participant_id, category } }
}

fn first_round_riders(state: &ContestState, category: &Category) -> Vec<Uuid> {
    state.heats_in_category(category)
        .into_iter()
        .filter(|h| h.round == HeatRound::First)
        .flat_map(|h| h.participants.iter().copied())
        .collect()
}

#[test]
fn test_paying_redraws_heats_of_category() -> Result<(), anyhow::Error> {
    let mut store = set_up_store();
    let rider = store.state().participant(Uuid::from_u128(1000)).unwrap().clone();
    let category = rider.categories[0].clone();
    assert!(store.state().heats_in_category(&category).is_empty());

    store.execute(toggle(rider.uuid, category.clone()))?;

    assert_eq!(first_round_riders(store.state(), &category), vec![rider.uuid]);
    Ok(())
}

#[test]
fn test_revoking_payment_redraws_without_rider() -> Result<(), anyhow::Error> {
    let mut store = set_up_store();
    let rider = store.state().participant(Uuid::from_u128(1000)).unwrap().clone();
    let category = rider.categories[0].clone();

    store.execute(toggle(rider.uuid, category.clone()))?;
    let paid_heats = store.state().heats_in_category(&category).into_iter().map(|h| h.uuid).collect::<Vec<_>>();

    let changes = store.execute(toggle(rider.uuid, category.clone()))?;

    assert!(first_round_riders(store.state(), &category).is_empty());
    assert!(paid_heats.iter().all(|id| store.state().heat(*id).is_none()));
    assert!(paid_heats.iter().all(|id| changes.deletions().contains(&&EntityId::Heat(*id))));
    Ok(())
}

#[test]
fn test_leaving_paid_category_redraws_it() -> Result<(), anyhow::Error> {
    let mut store = set_up_store();
    let rider = store.state().participant(Uuid::from_u128(1000)).unwrap().clone();
    let category = rider.categories[0].clone();
    store.execute(toggle(rider.uuid, category.clone()))?;

    let remaining = Category::built_ins()
        .into_iter()
        .filter(|c| *c != category && *c != Category::sponsored() && *c != Category::amateur())
        .collect::<Vec<_>>();
    store.execute(Action::UpdateParticipant { action: UpdateParticipantAction {
        participant_id: rider.uuid,
        update: ParticipantUpdate {
            categories: Some(remaining),
            is_sponsored: Some(false),
            sponsor_details: Some(None),
            ..Default::default()
        },
    } })?;

    assert!(store.state().participant(rider.uuid).unwrap().paid_categories.is_empty());
    assert!(first_round_riders(store.state(), &category).is_empty());
    Ok(())
}

#[test]
fn test_failed_action_leaves_state_untouched() {
    let mut store = set_up_store();
    let before = store.state().clone();

    let err = store.execute(toggle(Uuid::from_u128(4242), Category::girls())).unwrap_err();

    assert_matches!(err.downcast_ref::<ContestError>(), Some(ContestError::UnknownParticipant(_)));
    assert_eq!(*store.state(), before);
}

#[test]
fn test_same_seed_gives_same_heats() -> Result<(), anyhow::Error> {
    let mut first = set_up_store();
    let mut second = set_up_store();

    for store in [&mut first, &mut second] {
        for idx in 0..10 {
            let uuid = Uuid::from_u128(1000 + idx);
            let category = store.state().participant(uuid).unwrap().categories[0].clone();
            store.execute(toggle(uuid, category))?;
        }
    }

    assert_eq!(first.state().heats, second.state().heats);
    Ok(())
}

#[test]
fn test_removing_category_again_clears_heats_drawn_after_removal() -> Result<(), anyhow::Error> {
    let mut store = set_up_store();
    let rider = store.state().participant(Uuid::from_u128(1000)).unwrap().clone();
    let category = rider.categories[0].clone();
    let remove = || Action::RemoveCategory { action: RemoveCategoryAction { category: category.clone() } };

    store.execute(remove())?;
    assert!(store.state().heats_in_category(&category).is_empty());

    // the rider is still enrolled, so paying redraws the unregistered category
    store.execute(toggle(rider.uuid, category.clone()))?;
    assert_eq!(store.state().heats_in_category(&category).len(), 1);

    store.execute(remove())?;
    assert!(store.state().heats_in_category(&category).is_empty());

    let err = store.execute(remove()).unwrap_err();
    assert_matches!(err.downcast_ref::<ContestError>(), Some(ContestError::UnknownCategory(_)));
    Ok(())
}
