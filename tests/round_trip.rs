//! Property-based check of the make/unmake round-trip law: applying and then
//! reversing any legal move sequence must restore the exact starting
//! position, for any sequence the generator could have produced.

use crabcore::{movegen::MoveGenerator, position::Position};
use proptest::prelude::*;

proptest! {
    #[test]
    fn make_unmake_round_trips_over_random_legal_sequences(
        picks in prop::collection::vec(0_u32..1000, 0..40),
    ) {
        let generator = MoveGenerator::new();
        let mut position = Position::default();
        let before = position.to_string();

        let mut made = 0;
        for pick in picks {
            let moves = generator.generate_legal(&mut position);
            if moves.is_empty() {
                break;
            }
            let mv = moves[pick as usize % moves.len()];
            position.make(mv);
            made += 1;
        }

        for _ in 0..made {
            position.unmake().expect("one unmake per successful make");
        }

        prop_assert_eq!(position.to_string(), before);
    }

    #[test]
    fn generate_legal_does_not_mutate_the_position(
        picks in prop::collection::vec(0_u32..1000, 0..20),
    ) {
        let generator = MoveGenerator::new();
        let mut position = Position::default();

        for pick in picks {
            let before = position.to_string();
            let moves = generator.generate_legal(&mut position);
            prop_assert_eq!(position.to_string(), before);

            if moves.is_empty() {
                break;
            }
            let mv = moves[pick as usize % moves.len()];
            position.make(mv);
        }
    }
}
