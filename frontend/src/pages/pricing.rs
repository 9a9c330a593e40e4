use std::collections::BTreeSet;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::counter::format::group_indian;
use crate::Route;

/// Annual billing is charged for ten months out of twelve.
pub const ANNUAL_MONTHS_CHARGED: u64 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Billing {
    Monthly,
    Annual,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PricingItem {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Rupees per month.
    pub monthly_price: u64,
    pub required: bool,
}

pub const PRICING_ITEMS: &[PricingItem] = &[
    PricingItem {
        id: "core",
        name: "Core accounting",
        description: "Ledgers, invoicing and bank feeds for one company.",
        monthly_price: 1_499,
        required: true,
    },
    PricingItem {
        id: "gst",
        name: "GST compliance",
        description: "GSTR-1 and GSTR-3B preparation with auto-reconciliation.",
        monthly_price: 799,
        required: false,
    },
    PricingItem {
        id: "payroll",
        name: "Payroll",
        description: "Salary runs, payslips, PF and ESI filings for up to 50 staff.",
        monthly_price: 1_199,
        required: false,
    },
    PricingItem {
        id: "inventory",
        name: "Inventory",
        description: "Multi-warehouse stock with batch and expiry tracking.",
        monthly_price: 999,
        required: false,
    },
    PricingItem {
        id: "commerce",
        name: "Commerce sync",
        description: "Marketplace order import and settlement reconciliation.",
        monthly_price: 1_499,
        required: false,
    },
];

/// Sum of the selected items (required items always count) for the chosen
/// billing period.
pub fn calculate_total(items: &[PricingItem], selected: &BTreeSet<&str>, billing: Billing) -> u64 {
    let monthly: u64 = items
        .iter()
        .filter(|item| item.required || selected.contains(item.id))
        .map(|item| item.monthly_price)
        .sum();

    match billing {
        Billing::Monthly => monthly,
        Billing::Annual => monthly * ANNUAL_MONTHS_CHARGED,
    }
}

pub fn format_rupees(amount: u64) -> String {
    format!("₹{}", group_indian(amount))
}

#[function_component(Pricing)]
pub fn pricing() -> Html {
    let selected = use_state(BTreeSet::<&'static str>::new);
    let billing = use_state(|| Billing::Monthly);

    let total = calculate_total(PRICING_ITEMS, &selected, *billing);
    let period = match *billing {
        Billing::Monthly => "/month",
        Billing::Annual => "/year",
    };

    let set_billing = |value: Billing| {
        let billing = billing.clone();
        Callback::from(move |_: MouseEvent| billing.set(value))
    };

    html! {
        <div class="pricing-page">
            <section class="pricing-hero">
                <h1>{"Pay for what you use"}</h1>
                <p>{"Start with core accounting and add modules as your business grows."}</p>
                <div class="billing-toggle">
                    <button
                        class={classes!("billing-option", (*billing == Billing::Monthly).then(|| "active"))}
                        onclick={set_billing(Billing::Monthly)}
                    >
                        {"Monthly"}
                    </button>
                    <button
                        class={classes!("billing-option", (*billing == Billing::Annual).then(|| "active"))}
                        onclick={set_billing(Billing::Annual)}
                    >
                        {"Annual (2 months free)"}
                    </button>
                </div>
            </section>

            <section class="pricing-calculator">
                <ul class="pricing-items">
                    { for PRICING_ITEMS.iter().map(|item| {
                        let checked = item.required || selected.contains(item.id);
                        let onchange = {
                            let selected = selected.clone();
                            let id = item.id;
                            Callback::from(move |_: Event| {
                                let mut next = (*selected).clone();
                                if !next.remove(id) {
                                    next.insert(id);
                                }
                                selected.set(next);
                            })
                        };
                        html! {
                            <li class={classes!("pricing-item", checked.then(|| "selected"))}>
                                <label>
                                    <input
                                        type="checkbox"
                                        checked={checked}
                                        disabled={item.required}
                                        onchange={onchange}
                                    />
                                    <span class="item-name">{item.name}</span>
                                    <span class="item-price">{format!("{}/month", format_rupees(item.monthly_price))}</span>
                                </label>
                                <p class="item-description">{item.description}</p>
                            </li>
                        }
                    }) }
                </ul>

                <div class="pricing-total">
                    <span class="total-label">{"Your plan"}</span>
                    <span class="total-amount">{format_rupees(total)}{period}</span>
                    <Link<Route> to={Route::Home} classes="cta-button">
                        {"Book a demo"}
                    </Link<Route>>
                </div>
            </section>

            <style>
                {r#"
                .pricing-page {
                    min-height: 100vh;
                    padding: 8rem 2rem 4rem;
                    background: #0f172a;
                    color: #fff;
                }
                .pricing-hero {
                    text-align: center;
                    max-width: 720px;
                    margin: 0 auto 3rem;
                }
                .pricing-hero h1 {
                    font-size: 3rem;
                    margin-bottom: 1rem;
                }
                .billing-toggle {
                    display: inline-flex;
                    gap: 0.5rem;
                    margin-top: 1.5rem;
                    padding: 0.25rem;
                    border-radius: 999px;
                    background: rgba(255, 255, 255, 0.06);
                }
                .billing-option {
                    border: none;
                    padding: 0.6rem 1.4rem;
                    border-radius: 999px;
                    background: transparent;
                    color: #cbd5e1;
                    cursor: pointer;
                }
                .billing-option.active {
                    background: #22c55e;
                    color: #0f172a;
                }
                .pricing-calculator {
                    display: grid;
                    grid-template-columns: 2fr 1fr;
                    gap: 2rem;
                    max-width: 1000px;
                    margin: 0 auto;
                }
                .pricing-items {
                    list-style: none;
                    padding: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .pricing-item {
                    padding: 1.25rem;
                    border-radius: 12px;
                    border: 1px solid rgba(255, 255, 255, 0.08);
                }
                .pricing-item.selected {
                    border-color: #22c55e;
                }
                .pricing-item label {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }
                .item-price {
                    margin-left: auto;
                    color: #86efac;
                }
                .item-description {
                    color: #94a3b8;
                    margin: 0.5rem 0 0 1.75rem;
                }
                .pricing-total {
                    position: sticky;
                    top: 6rem;
                    align-self: start;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    padding: 2rem;
                    border-radius: 16px;
                    background: rgba(34, 197, 94, 0.08);
                }
                .total-amount {
                    font-size: 2.5rem;
                    font-weight: 700;
                }
                @media (max-width: 768px) {
                    .pricing-calculator {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_items_always_counted() {
        let none = BTreeSet::new();
        assert_eq!(calculate_total(PRICING_ITEMS, &none, Billing::Monthly), 1_499);
    }

    #[test]
    fn test_selected_items_are_summed() {
        let selected: BTreeSet<&str> = ["gst", "payroll"].into_iter().collect();
        assert_eq!(
            calculate_total(PRICING_ITEMS, &selected, Billing::Monthly),
            1_499 + 799 + 1_199
        );
    }

    #[test]
    fn test_annual_billing_charges_ten_months() {
        let selected: BTreeSet<&str> = ["inventory"].into_iter().collect();
        assert_eq!(
            calculate_total(PRICING_ITEMS, &selected, Billing::Annual),
            (1_499 + 999) * 10
        );
    }

    #[test]
    fn test_unknown_selection_ignored() {
        let selected: BTreeSet<&str> = ["crm"].into_iter().collect();
        assert_eq!(calculate_total(PRICING_ITEMS, &selected, Billing::Monthly), 1_499);
    }

    #[test]
    fn test_rupee_formatting() {
        assert_eq!(format_rupees(1_499), "₹1,499");
        assert_eq!(format_rupees(143_950), "₹1,43,950");
    }
}
