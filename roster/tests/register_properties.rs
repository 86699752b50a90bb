//! Property tests for register capacity, sorting and gamertag generation

use proptest::prelude::*;
use roster::{Name, Player, Register};

fn name_strategy() -> impl Strategy<Value = Name> {
    ("[A-Za-z]{0,6}", "[A-Za-z]{0,6}").prop_map(|(first, family)| Name::new(first, family))
}

#[derive(Debug, Clone)]
enum Op {
    Add(Name),
    AddBatch(Vec<Name>),
    Remove(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        name_strategy().prop_map(Op::Add),
        prop::collection::vec(name_strategy(), 0..6).prop_map(Op::AddBatch),
        (0usize..8).prop_map(Op::Remove),
    ]
}

proptest! {
    #[test]
    fn size_never_exceeds_capacity(capacity in 0usize..10, ops in prop::collection::vec(op_strategy(), 0..40)) {
        let mut register = Register::with_capacity(capacity);
        for op in ops {
            match op {
                Op::Add(name) => register.add_name(name),
                Op::AddBatch(batch) => register.add_names(batch),
                Op::Remove(pos) => {
                    let before = register.size_of_register();
                    let removed = register.remove_name(pos);
                    prop_assert_eq!(removed.is_ok(), pos < before);
                }
            }
            prop_assert!(register.size_of_register() <= register.room_capacity());
        }
    }

    #[test]
    fn batch_add_is_atomic(
        capacity in 0usize..10,
        existing in prop::collection::vec(name_strategy(), 0..10),
        batch in prop::collection::vec(name_strategy(), 0..10),
    ) {
        let mut register = Register::with_capacity(capacity);
        for name in existing {
            register.add_name(name);
        }
        let before = register.size_of_register();
        let batch_len = batch.len();

        register.add_names(batch);

        if before + batch_len <= capacity {
            prop_assert_eq!(register.size_of_register(), before + batch_len);
        } else {
            prop_assert_eq!(register.size_of_register(), before);
        }
    }

    #[test]
    fn sort_is_idempotent_and_ordered(names in prop::collection::vec(name_strategy(), 0..20)) {
        let mut register = Register::new();
        register.add_names(names);
        register.sort_register();
        let once: Vec<Name> = register.iter().cloned().collect();

        register.sort_register();
        let twice: Vec<Name> = register.iter().cloned().collect();

        prop_assert_eq!(&once, &twice);
        for pair in once.windows(2) {
            prop_assert!(pair[0].family_name() <= pair[1].family_name());
            if pair[0].family_name() == pair[1].family_name() {
                prop_assert!(pair[0].first_name() <= pair[1].first_name());
            }
        }
    }

    #[test]
    fn gamertag_only_changes_in_range(name in name_strategy(), i in -200i32..300) {
        let mut player = Player::new(name, "unchanged");
        player.generate_gamertag(i);
        if (1..=100).contains(&i) {
            prop_assert!(player.gamertag().ends_with(&i.to_string()));
            prop_assert!(!player.gamertag().chars().any(char::is_whitespace));
        } else {
            prop_assert_eq!(player.gamertag(), "unchanged");
        }
    }
}
