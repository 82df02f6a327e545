use fieldcalc::prelude::*;

fn main() -> Result<(), FieldcalcError> {
    // Raw text as it would arrive from a form or a CSV row.
    let rows = [
        ("office move", "expense", " 1200.00 ", "980"),
        ("brand refresh", "Investment", "2500", "2613.75"),
        ("emergency fund", "savings", "800", "0"),
    ];

    let mut log = ActivityLog::new("fy26-q3");
    for (name, kind, budget, actual) in rows {
        let name = parse_label("name", name)?;
        let kind = parse_kind("kind", kind)?;
        let budget = parse_scalar("budget", budget)?;
        let actual = parse_scalar("actual", actual)?;
        log.add(Activity::new(name, kind, budget, actual));
    }

    println!("{} activities in `{}`", log.len(), log.name());
    for activity in log.activities() {
        println!("{}", activity.summary());
    }

    // Expected return at 5% per month over half a year.
    let months = parse_months("months", "6")?;
    println!("activity, budget, expected_return");
    for point in log.expected_returns(0.05, months) {
        println!("{}, {:.2}, {:.2}", point.activity, point.budget, point.value);
    }
    println!(
        "total expected return: {:.2}",
        log.total_expected_return(0.05, months)
    );

    log.clear();
    println!("after clear: {} activities", log.len());
    Ok(())
}
