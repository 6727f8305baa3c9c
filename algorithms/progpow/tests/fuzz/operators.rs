use bolero::check;
use progpow::kernels::math::{random_math, random_merge, MathOp, MergeOp, NUM_MATH_OPS};

#[test]
fn fuzz_math_selector_totality() {
    check!()
        .with_type::<(u32, u32, u32)>()
        .for_each(|&(a, b, selector)| {
            let op = MathOp::from_selector(selector);
            assert_eq!(op, MathOp::ALL[(selector % NUM_MATH_OPS) as usize]);
            assert_eq!(random_math(a, b, selector), op.apply(a, b));
            assert_eq!(
                random_math(a, b, selector),
                random_math(a, b, selector % NUM_MATH_OPS),
                "Only selector % 11 may pick the operation"
            );
        });
}

#[test]
fn fuzz_merge_keeps_entropy() {
    check!()
        .with_type::<(u32, u32, u32, u32)>()
        .for_each(|&(a1, a2, b, selector)| {
            // Every merge formula is a bijection in `a` for fixed `b`.
            let mut m1 = a1;
            let mut m2 = a2;
            random_merge(&mut m1, b, selector);
            random_merge(&mut m2, b, selector);
            assert_eq!(a1 == a2, m1 == m2, "Merge lost entropy of a");

            match MergeOp::from_selector(selector) {
                MergeOp::RotlXor(r) | MergeOp::RotrXor(r) => assert!((1..=31).contains(&r)),
                MergeOp::MulAdd | MergeOp::XorMul => {}
            }
        });
}
