use page_calc::{CursorPolicy, PageCalc, PageCalcConfig};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let total = 47;

    // Example 1: Navigating with cursors
    println!("=== Cursor navigation (3 items per page, {} items) ===", total);
    let mut calc = PageCalc::new(3).expect("failed to create calculator");
    calc.move_cursor(10, None).expect("failed to move cursor");
    println!("Position: {}", calc.position());
    println!("Next cursor: {:?}", calc.next_cursor(total));
    println!("Previous cursor: {:?}", calc.previous_cursor());
    println!("Last cursor: {}", calc.last_cursor(total));
    println!("Items on this page: {}", calc.number_of_items(total));

    // Example 2: Jumping to the last page
    calc.goto_page(calc.last_page(total), None)
        .expect("failed to go to page");
    println!("\n=== Last page ===");
    println!("Position: {}", calc.position());
    println!("Next page: {:?}", calc.next_page(total));
    println!("Items on this page: {}", calc.number_of_items(total));

    // Example 3: Snapping cursors coming from an untrusted query string
    println!("\n=== Snapping cursors (20 items per page) ===");
    let config = PageCalcConfig::builder()
        .limit(20)
        .cursor_policy(CursorPolicy::Snap)
        .build();
    let mut calc = PageCalc::from_config(config).expect("failed to create calculator");
    for cursor in [0, 7, 20, 45] {
        calc.move_cursor(cursor, None).expect("failed to move cursor");
        println!("Cursor {} -> {}", cursor, calc.position());
    }

    // Example 4: Listing every page
    println!("\n=== All pages (20 items per page, 95 items) ===");
    for window in calc.pages(95) {
        println!(
            "Page {}: items {} to {}",
            window.page,
            window.cursor,
            window.cursor + window.items - 1
        );
    }
}
