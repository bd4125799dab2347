#[macro_use]
extern crate assert_float_eq;

use menu_planner_rs::models::{Catalog, Category, MenuItem};
use menu_planner_rs::state::OrderSession;
use menu_planner_rs::PlannerError;

fn order<'a>(catalog: &'a Catalog, budget: f64, names: [&str; 3]) -> OrderSession<'a> {
    let mut session = OrderSession::new(catalog);
    session.set_budget(budget).unwrap();
    for (category, name) in Category::ALL.into_iter().zip(names) {
        session.select_by_name(category, name).unwrap();
    }
    session
}

#[test]
fn test_scenario_a_receipt_within_budget() {
    let catalog = Catalog::default();
    let mut session = order(&catalog, 10.0, ["Burger", "Water", "Pie"]);

    let receipt = session.confirm().unwrap();
    assert_float_absolute_eq!(receipt.total, 9.0);
    assert_float_absolute_eq!(receipt.remaining, 1.0);
    assert_float_absolute_eq!(receipt.budget, 10.0);

    let names: Vec<&str> = receipt.lines.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec!["Burger", "Water", "Pie"]);
    assert_eq!(receipt.lines[2].description, "Homemade apple pie");

    // Confirming does not consume the selections.
    assert!(session.is_complete());
}

#[test]
fn test_scenario_b_over_budget_rejected() {
    let catalog = Catalog::default();
    let mut session = order(&catalog, 5.0, ["Pizza", "Water", "Pie"]);

    match session.confirm() {
        Err(PlannerError::BudgetExceeded { total, budget }) => {
            assert_float_absolute_eq!(total, 12.0);
            assert_float_absolute_eq!(budget, 5.0);
        }
        other => panic!("expected BudgetExceeded, got {:?}", other),
    }

    // Selections cleared, budget kept.
    assert_eq!(session.missing(), Some(Category::Food));
    assert_eq!(session.total(), 0.0);
    assert_eq!(session.budget(), Some(5.0));
}

#[test]
fn test_total_equal_to_budget_is_affordable() {
    let catalog = Catalog::default();
    let mut session = order(&catalog, 12.0, ["Burger", "Soda", "Cake"]);
    assert!(session.is_affordable());

    let receipt = session.confirm().unwrap();
    assert_eq!(receipt.remaining, 0.0);
}

#[test]
fn test_budget_one_ulp_below_total_is_rejected() {
    let catalog = Catalog::new(
        vec![MenuItem::new("Bagel", 0.1, "")],
        vec![MenuItem::new("Tea", 0.2, "")],
        vec![MenuItem::new("Mint", 0.05, "")],
    )
    .unwrap();

    let total = 0.1 + 0.2 + 0.05;
    let mut exact = order(&catalog, total, ["bagel", "tea", "mint"]);
    assert!(exact.confirm().is_ok());

    let below = f64::from_bits(total.to_bits() - 1);
    let mut short = order(&catalog, below, ["bagel", "tea", "mint"]);
    assert!(matches!(
        short.confirm(),
        Err(PlannerError::BudgetExceeded { .. })
    ));
}

#[test]
fn test_receipt_iff_total_within_budget_for_every_combination() {
    let catalog = Catalog::default();

    for budget in [9.0, 12.0, 13.5, 16.0] {
        for food in catalog.items(Category::Food) {
            for drink in catalog.items(Category::Drink) {
                for dessert in catalog.items(Category::Dessert) {
                    let names = [
                        food.name.as_str(),
                        drink.name.as_str(),
                        dessert.name.as_str(),
                    ];
                    let mut session = order(&catalog, budget, names);
                    let expected = food.price + drink.price + dessert.price;
                    assert_eq!(session.total(), expected);

                    let result = session.confirm();
                    assert_eq!(result.is_ok(), expected <= budget);
                    if let Ok(receipt) = result {
                        assert_eq!(receipt.remaining, budget - expected);
                        assert!(receipt.remaining >= 0.0);
                    }
                }
            }
        }
    }
}

#[test]
fn test_reselecting_same_item_is_idempotent() {
    let catalog = Catalog::default();
    let mut session = order(&catalog, 20.0, ["Salad", "Juice", "Cake"]);
    let before = session.total();

    session.select_by_name(Category::Drink, "Juice").unwrap();
    session.select_by_name(Category::Drink, "JUICE").unwrap();
    assert_eq!(session.total(), before);
}

#[test]
fn test_lowercase_input_matches_catalog() {
    let catalog = Catalog::default();
    let mut session = OrderSession::new(&catalog);

    let item = session.select_by_name(Category::Food, "burger").unwrap();
    assert_eq!(item.name, "Burger");

    let item = session.select_by_name(Category::Dessert, "ice cream").unwrap();
    assert_eq!(item.name, "Ice Cream");

    assert!(matches!(
        session.select_by_name(Category::Dessert, "Burger"),
        Err(PlannerError::ItemNotFound { category: Category::Dessert, .. })
    ));
}

#[test]
fn test_fractional_prices_and_budget() {
    let catalog = Catalog::new(
        vec![MenuItem::new("Wrap", 4.75, "Chicken wrap")],
        vec![MenuItem::new("Latte", 3.5, "")],
        vec![MenuItem::new("Cookie", 1.25, "")],
    )
    .unwrap();

    let mut session = order(&catalog, 10.25, ["wrap", "latte", "cookie"]);
    let receipt = session.confirm().unwrap();
    assert_float_absolute_eq!(receipt.total, 9.5);
    assert_float_absolute_eq!(receipt.remaining, 0.75);
}
