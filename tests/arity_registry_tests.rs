//! Global registry footprint of the restriction and spread combinators.
//!
//! Kept in its own test binary so no other test writes to the global
//! registry while the entry count is compared.

use arity_combinators::arity::{ArityRegistry, get_arity, restrict_arity};
use arity_combinators::compose::{spread_apply, spread_combine_two};
use arity_combinators::function::{Function, Value};
use arity_combinators::{CombinatorError, args};
use rstest::rstest;

fn sum() -> Function {
    Function::binary(|x: Value, y: Value| Ok(Value::Int(x.as_int()? + y.as_int()?)))
}

#[rstest]
fn test_dropped_combinators_leave_no_registry_entries() {
    let before = ArityRegistry::global().len();

    for _ in 0..10_000 {
        let restricted = restrict_arity(sum(), 2);
        assert_eq!(get_arity(&restricted), 2);

        let applied = spread_apply(sum(), sum());
        assert_eq!(get_arity(&applied), 4);

        let combined = spread_combine_two(sum(), restricted, sum());
        assert_eq!(get_arity(&combined), 4);
        assert_eq!(combined.apply(args![1, 2, 3, 4]), Ok(Value::Int(10)));
        assert_eq!(
            applied.apply(args![1, 2, 3, 4, 5]),
            Err(CombinatorError::arity_mismatch(4, 5))
        );
    }

    assert_eq!(ArityRegistry::global().len(), before);
}
