use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew::TargetCast;

use crate::glossary::Prefill;
use crate::odds::{self, Calculation, Odds, OddsFormat};

#[derive(Properties, PartialEq)]
pub struct CalculatorProps {
    /// Seed from the glossary's "Try This Term". When present the view
    /// starts filled in and already calculated.
    #[prop_or_default]
    pub prefill: Option<Prefill>,
}

fn run(format: OddsFormat, odds_raw: &str, stake_raw: &str) -> Option<(Calculation, Odds)> {
    odds::calculate(format, odds_raw, stake_raw)
        .ok()
        .zip(Odds::parse(odds_raw, format).ok())
}

#[function_component(Calculator)]
pub fn calculator(props: &CalculatorProps) -> Html {
    let format = use_state(|| {
        props
            .prefill
            .map(|p| p.format)
            .unwrap_or(OddsFormat::American)
    });
    let odds_input = use_state(|| {
        props
            .prefill
            .map(|p| p.odds.to_string())
            .unwrap_or_default()
    });
    let stake_input = use_state(|| {
        props
            .prefill
            .map(|p| p.stake.to_string())
            .unwrap_or_default()
    });
    let result = use_state(|| {
        props
            .prefill
            .and_then(|p| run(p.format, p.odds, &p.stake.to_string()))
    });

    let on_format_change = {
        let format = format.clone();
        Callback::from(move |e: Event| {
            let target: HtmlSelectElement = e.target_unchecked_into();
            let next = match target.selected_index() {
                1 => OddsFormat::Decimal,
                2 => OddsFormat::Fractional,
                _ => OddsFormat::American,
            };
            format.set(next);
        })
    };
    let on_odds_input = {
        let odds_input = odds_input.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlInputElement = e.target_unchecked_into();
            odds_input.set(target.value());
        })
    };
    let on_stake_input = {
        let stake_input = stake_input.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlInputElement = e.target_unchecked_into();
            stake_input.set(target.value());
        })
    };
    let on_calculate = {
        let format = format.clone();
        let odds_input = odds_input.clone();
        let stake_input = stake_input.clone();
        let result = result.clone();
        Callback::from(move |_| {
            result.set(run(*format, &odds_input, &stake_input));
        })
    };

    // Red border plus a format-specific example while the text is invalid;
    // an empty field is not an error yet.
    let odds_ok = odds_input.trim().is_empty() || odds::validate(&odds_input, *format);

    html! {
        <main class="page">
            <h1>{"Odds Calculator"}</h1>
            <div class="card form">
                <div class="input-group">
                    <label>{"Odds Format"}</label>
                    <select onchange={on_format_change} aria-label="Odds format">
                        { for OddsFormat::all().iter().map(|f| {
                            html! { <option selected={*f == *format}>{ f.caption() }</option> }
                        })}
                    </select>
                </div>
                <div class="input-group">
                    <label>{"Odds"}</label>
                    <input
                        type="text"
                        value={(*odds_input).clone()}
                        oninput={on_odds_input}
                        placeholder={format.placeholder()}
                        class={if odds_ok { "" } else { "error" }}
                        aria-label="Odds" />
                    { if !odds_ok {
                        html! {
                            <p class="hint error-text">
                                {"Enter valid odds for the selected format. Example: "}
                                { format.example() }
                            </p>
                        }
                    } else { html!{} }}
                </div>
                <div class="input-group">
                    <label>{"Stake ($)"}</label>
                    <input
                        type="number"
                        value={(*stake_input).clone()}
                        oninput={on_stake_input}
                        placeholder="Enter stake amount"
                        aria-label="Stake" />
                </div>
                <button class="primary" onclick={on_calculate}>{"Calculate"}</button>
            </div>
            { if let Some((calc, price)) = *result {
                let d = price.to_decimal();
                html! {
                    <div class="card results">
                        <h2>{"Results"}</h2>
                        <p>{"Implied Probability: "}<strong>{ format!("{:.2}%", calc.implied_probability_pct) }</strong></p>
                        <p>{"Potential Payout: "}<strong>{ format!("${:.2}", calc.potential_payout) }</strong></p>
                        <div class="section-divider"></div>
                        <div class="muted">{"Same price in every notation"}</div>
                        <p>{"American: "}<strong>{ odds::format_american(d) }</strong></p>
                        <p>{"Decimal: "}<strong>{ odds::format_decimal(d) }</strong></p>
                        <p>{"Fractional: "}<strong>{ odds::format_fractional(d) }</strong></p>
                    </div>
                }
            } else { html!{} }}
        </main>
    }
}
