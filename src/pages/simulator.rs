use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew::TargetCast;

use crate::odds::{self, OddsFormat, Stake};

const TEAMS: &[&str] = &["Team A", "Team B"];

// Payout shown and profit realized once the outcome is known. The pricing
// module only knows wins; a loss zeroes the payout and costs the full stake.
fn settle(potential_payout: f64, stake: f64, won: bool) -> (f64, f64) {
    if won {
        (potential_payout, potential_payout - stake)
    } else {
        (0.0, -stake)
    }
}

#[derive(Clone, Copy, PartialEq)]
struct Outcome {
    payout: f64,
    profit: f64,
}

#[function_component(Simulator)]
pub fn simulator() -> Html {
    let team = use_state(|| None::<usize>);
    let odds_input = use_state(String::new);
    let stake_input = use_state(String::new);
    let is_win = use_state(|| true);
    let result = use_state(|| None::<Outcome>);

    let on_team_change = {
        let team = team.clone();
        Callback::from(move |e: Event| {
            let target: HtmlSelectElement = e.target_unchecked_into();
            let idx = target.selected_index();
            // Index 0 is the "Select a team" placeholder.
            team.set(if idx > 0 { Some((idx - 1) as usize) } else { None });
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
    let set_win = {
        let is_win = is_win.clone();
        Callback::from(move |_| is_win.set(true))
    };
    let set_loss = {
        let is_win = is_win.clone();
        Callback::from(move |_| is_win.set(false))
    };
    let on_simulate = {
        let team = team.clone();
        let odds_input = odds_input.clone();
        let stake_input = stake_input.clone();
        let is_win = is_win.clone();
        let result = result.clone();
        Callback::from(move |_| {
            // Picking a team is a precondition of the slip, not of pricing.
            if team.is_none() {
                result.set(None);
                return;
            }
            let outcome = odds::calculate(OddsFormat::American, &odds_input, &stake_input)
                .ok()
                .zip(Stake::parse(&stake_input).ok())
                .map(|(calc, stake)| {
                    let (payout, profit) = settle(calc.potential_payout, stake.amount(), *is_win);
                    Outcome { payout, profit }
                });
            result.set(outcome);
        })
    };

    html! {
        <main class="page">
            <h1>{"Bet Slip Simulator"}</h1>
            <div class="card form">
                <div class="input-group">
                    <label>{"Select Team"}</label>
                    <select onchange={on_team_change} aria-label="Select team">
                        <option selected={team.is_none()}>{"Select a team"}</option>
                        { for TEAMS.iter().enumerate().map(|(i, name)| {
                            html! { <option selected={*team == Some(i)}>{ *name }</option> }
                        })}
                    </select>
                </div>
                <div class="input-group">
                    <label>{"American Odds"}</label>
                    <input
                        type="text"
                        value={(*odds_input).clone()}
                        oninput={on_odds_input}
                        placeholder="e.g., -110 or +150"
                        aria-label="American odds" />
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
                <div class="input-group">
                    <label>{"Outcome"}</label>
                    <div class="row">
                        <button
                            class={if *is_win { "toggle active" } else { "toggle" }}
                            onclick={set_win}>
                            {"Win"}
                        </button>
                        <button
                            class={if *is_win { "toggle" } else { "toggle active" }}
                            onclick={set_loss}>
                            {"Loss"}
                        </button>
                    </div>
                </div>
                <button class="primary" onclick={on_simulate}>{"Simulate Bet"}</button>
            </div>
            { if let Some(outcome) = *result {
                html! {
                    <div class="card results">
                        <h2>{"Simulation Results"}</h2>
                        <p>{"Payout: "}<strong>{ format!("${:.2}", outcome.payout) }</strong></p>
                        <p class={if outcome.profit >= 0.0 { "profit" } else { "loss" }}>
                            {"Profit/Loss: "}{ format!("${:.2}", outcome.profit) }
                        </p>
                    </div>
                }
            } else { html!{} }}
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::settle;
    use crate::odds::{self, OddsFormat};

    #[test]
    fn win_keeps_full_payout_and_positive_profit() {
        let calc = odds::calculate(OddsFormat::American, "-110", "110").unwrap();
        let (payout, profit) = settle(calc.potential_payout, 110.0, true);
        assert!((payout - 210.0).abs() < 1e-9);
        assert!((profit - 100.0).abs() < 1e-9);
    }

    #[test]
    fn loss_zeroes_payout_and_costs_the_stake() {
        let calc = odds::calculate(OddsFormat::American, "+150", "40").unwrap();
        let (payout, profit) = settle(calc.potential_payout, 40.0, false);
        assert_eq!(payout, 0.0);
        assert_eq!(profit, -40.0);
    }
}
