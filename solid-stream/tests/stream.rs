use insta::assert_debug_snapshot;
use rstest::rstest;

use solid_stream::{
    empty, from_vec, of, range, single, stream, BoxedStream, Error, Optional, Stream, StreamExt,
};

#[rstest]
#[case(vec![1, 2, 2, 3, 1], vec![1, 2, 3])]
#[case(vec![], vec![])]
#[case(vec![4, 4, 4], vec![4])]
fn test_distinct(#[case] input: Vec<i32>, #[case] expected: Vec<i32>) {
    assert_eq!(from_vec(input).distinct().to_vec(), expected);
}

#[rstest]
#[case(vec![3, 1, 2], vec![1, 2, 3])]
#[case(vec![1], vec![1])]
#[case(vec![2, -1, 2, 0], vec![-1, 0, 2, 2])]
fn test_sorted(#[case] input: Vec<i32>, #[case] expected: Vec<i32>) {
    assert_eq!(from_vec(input.clone()).sorted().to_vec(), expected);
    assert_eq!(
        from_vec(input).sorted_by(|a, b| a.cmp(b)).to_vec(),
        expected
    );
}

#[rstest]
#[case(0, 5, Optional::present(10))]
#[case(0, 1, Optional::present(0))]
#[case(3, 3, Optional::absent())]
fn test_reduce_range(#[case] start: i64, #[case] end: i64, #[case] expected: Optional<i64>) {
    assert_eq!(range(start, end).reduce(|a, b| a + b), expected);
}

#[test]
fn test_reduce_empty() {
    assert_eq!(empty::<i64>().reduce(|a, b| a + b), Optional::absent());
}

#[test]
fn test_map_twice_is_equal() {
    let s = of([1, 2, 3]).map(|x| x * x);
    assert_eq!(s.to_vec(), s.to_vec());
}

#[test]
fn test_separate() {
    let s = of([1, 2, 3, 4]).separate(of([2, 4]));
    assert_debug_snapshot!(s.to_vec(), @r"
    [
        1,
        3,
    ]
    ");
}

#[test]
fn test_flat_map() {
    let s = of([1, 2]).flat_map(|x| [x, x]);
    assert_eq!(s.to_vec(), vec![1, 1, 2, 2]);
    let s = of([1, 2, 3]).flat_map(|x| if x == 2 { vec![] } else { vec![x] });
    assert_eq!(s.to_vec(), vec![1, 3]);
}

#[test]
fn test_round_trip_through_vec() {
    let s = range(0, 10).filter(|x| x % 3 != 0).map(|x| x * 2);
    let again = from_vec(s.to_vec());
    assert_eq!(again.to_vec(), s.to_vec());
}

#[test]
fn test_pipeline() {
    let words = of(["pear", "fig", "apple", "fig", "kiwi", "date"]);
    let s = (&words)
        .distinct()
        .filter(|w| w.len() > 3)
        .sorted_by_key(|w| w.len())
        .map(|w| w.to_uppercase());
    assert_debug_snapshot!(s.to_vec(), @r#"
    [
        "PEAR",
        "KIWI",
        "DATE",
        "APPLE",
    ]
    "#);
    assert_eq!(words.count(), 6);
}

#[test]
fn test_skip_take_reverse() {
    let s = range(0, 10).skip(2).take(5).reverse();
    assert_eq!(s.to_vec(), vec![6, 5, 4, 3, 2]);
    assert_eq!(s.first(), Optional::present(6));
    assert_eq!(s.last(), Optional::present(2));
}

#[test]
fn test_merge_without() {
    let s = stream![1, 2].merge(single(1)).merge(empty()).without(1);
    assert_eq!(s.to_vec(), vec![2]);
}

#[test]
fn test_cast_reports_position() {
    let results = of([10i64, 1000, 20]).cast::<u8>().to_vec();
    assert_debug_snapshot!(results, @r#"
    [
        Ok(
            10,
        ),
        Err(
            Cast {
                index: 1,
                from: "i64",
                to: "u8",
            },
        ),
        Ok(
            20,
        ),
    ]
    "#);
}

#[test]
fn test_cast_results_stop_try_fold() {
    let sum = of([1i64, 2, -3, 4])
        .cast::<u32>()
        .try_fold(0u32, |acc, x| x.map(|x| acc + x));
    assert_eq!(
        sum,
        Err(Error::Cast {
            index: 2,
            from: "i64",
            to: "u32"
        })
    );
}

#[test]
fn test_custom_stream() {
    // a root defined by implementing the trait directly
    struct Countdown(u32);

    impl Stream for Countdown {
        type Item = u32;
        type Iter<'a>
            = std::iter::Rev<std::ops::Range<u32>>
        where
            Self: 'a;

        fn iter(&self) -> Self::Iter<'_> {
            (0..self.0).rev()
        }
    }

    let s = Countdown(4).map(|x| x * 10);
    assert_eq!(s.to_vec(), vec![30, 20, 10, 0]);
    assert_eq!(s.to_vec(), vec![30, 20, 10, 0]);
}

#[test]
fn test_boxed_streams_are_interchangeable() {
    fn pick(small: bool) -> BoxedStream<'static, i64> {
        if small {
            range(0, 3).boxed()
        } else {
            range(0, 100).filter(|x| x % 25 == 0).boxed()
        }
    }
    assert_eq!(pick(true).to_vec(), vec![0, 1, 2]);
    assert_eq!(pick(false).to_vec(), vec![0, 25, 50, 75]);
}

#[test]
fn test_optional_results() {
    let first = of(["a", "b"]).map(|s| s.to_string()).first();
    assert_eq!(first.or_else(String::new), "a");
    let missing = empty::<String>().first();
    assert_eq!(missing.or_else(|| "none".to_string()), "none");
}

#[test]
fn test_flat_map_into_stream_pipeline() {
    let s = of([1i64, 2, 3]).flat_map(|x| range(0, x).map(|y| y * 10));
    assert_eq!(s.to_vec(), vec![0, 0, 10, 0, 10, 20]);
}

#[rstest]
#[case(0, vec![])]
#[case(1, vec![0])]
#[case(5, vec![3, 2, 0])]
fn test_flat_map_inner_operators(#[case] n: i64, #[case] expected: Vec<i64>) {
    // every operator can sit inside the inner pipeline
    let s = single(n).flat_map(|n| {
        range(0, n)
            .merge(range(0, n))
            .distinct()
            .without(1)
            .separate(of([4]))
            .inspect(|_| {})
            .sorted_by_key(|x| -x)
            .skip(0)
            .take(3)
    });
    assert_eq!(s.to_vec(), expected);
}

#[test]
fn test_pipeline_in_for_loop() {
    let mut seen = Vec::new();
    for x in range(0, 4).filter(|x| x % 2 == 0).map(|x| x + 1) {
        seen.push(x);
    }
    assert_eq!(seen, vec![1, 3]);
}
