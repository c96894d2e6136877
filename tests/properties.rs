use page_calc::{CursorPolicy, PageCalc, PageCalcConfig};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_goto_then_move_keeps_page(limit in 1..1_000u64, page in 1..10_000u64) {
        let mut calc = PageCalc::new(3).unwrap();
        calc.goto_page(page, Some(limit)).unwrap();
        prop_assert_eq!(calc.cursor(), (page - 1) * limit + 1);

        calc.move_cursor(calc.cursor(), Some(limit)).unwrap();
        prop_assert_eq!(calc.page(), page);
    }

    #[test]
    fn prop_move_then_goto_keeps_cursor(limit in 1..1_000u64, offset in 0..10_000u64) {
        let cursor = offset * limit + 1;
        let mut calc = PageCalc::new(limit).unwrap();
        calc.move_cursor(cursor, None).unwrap();
        prop_assert_eq!(calc.page(), offset + 1);

        calc.goto_page(calc.page(), None).unwrap();
        prop_assert_eq!(calc.cursor(), cursor);
    }

    #[test]
    fn prop_total_pages_monotonic(limit in 1..500u64, a in 0..100_000u64, b in 0..100_000u64) {
        let calc = PageCalc::new(limit).unwrap();
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(calc.total_pages(low) <= calc.total_pages(high));
    }

    #[test]
    fn prop_items_sum_to_total(limit in 1..100u64, total in 0..5_000u64) {
        let mut calc = PageCalc::new(limit).unwrap();
        let mut sum = 0;
        for page in 1..=calc.total_pages(total) {
            calc.goto_page(page, None).unwrap();
            sum += calc.number_of_items(total);
        }
        prop_assert_eq!(sum, total);
    }

    #[test]
    fn prop_pages_match_calculator(limit in 1..100u64, total in 0..5_000u64) {
        let calc = PageCalc::new(limit).unwrap();
        let pages = calc.pages(total);
        prop_assert_eq!(pages.len() as u64, calc.total_pages(total));

        let mut probe = calc.clone();
        let mut sum = 0;
        for window in pages {
            probe.goto_page(window.page, None).unwrap();
            prop_assert_eq!(window.cursor, probe.cursor());
            prop_assert_eq!(window.items, probe.number_of_items(total));
            sum += window.items;
        }
        prop_assert_eq!(sum, total);
        prop_assert_eq!(calc.page(), 1);
    }

    #[test]
    fn prop_limit_one_is_identity(position in 1..1_000_000u64) {
        let mut calc = PageCalc::new(1).unwrap();
        calc.move_cursor(position, None).unwrap();
        prop_assert_eq!(calc.cursor(), position);
        prop_assert_eq!(calc.page(), position);

        calc.goto_page(position, None).unwrap();
        prop_assert_eq!(calc.cursor(), position);
    }

    #[test]
    fn prop_rejected_cursor_keeps_state(limit in 2..1_000u64, cursor in 1..100_000u64, page in 1..100u64) {
        prop_assume!(cursor % limit != 1);

        let mut calc = PageCalc::new(limit).unwrap();
        calc.goto_page(page, None).unwrap();
        let before = calc.position();

        prop_assert!(calc.move_cursor(cursor, None).is_err());
        prop_assert_eq!(calc.position(), before);
    }

    #[test]
    fn prop_snapped_cursor_starts_containing_page(limit in 2..1_000u64, cursor in 1..100_000u64) {
        let config = PageCalcConfig::builder()
            .limit(limit)
            .cursor_policy(CursorPolicy::Snap)
            .build();
        let mut calc = PageCalc::from_config(config).unwrap();
        calc.move_cursor(cursor, None).unwrap();

        let snapped = calc.cursor();
        prop_assert_eq!(snapped % limit, 1);
        prop_assert!(snapped <= cursor && cursor < snapped + limit);
        prop_assert_eq!(snapped, (calc.page() - 1) * limit + 1);
    }
}
