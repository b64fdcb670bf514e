//! Static glossary catalog. Read-only reference data; user progress against
//! it lives in local storage, never here.

use crate::odds::OddsFormat;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Category {
    BetType,
    Strategy,
    Slang,
    OddsFormat,
}

impl Category {
    pub fn all() -> &'static [Self] {
        &[Self::BetType, Self::Strategy, Self::Slang, Self::OddsFormat]
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::BetType => "Bet Type",
            Self::Strategy => "Strategy",
            Self::Slang => "Slang",
            Self::OddsFormat => "Odds Format",
        }
    }
}

/// Seed values a term hands to the calculator.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Prefill {
    pub format: OddsFormat,
    pub odds: &'static str,
    pub stake: f64,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Quiz {
    pub question: &'static str,
    pub choices: &'static [&'static str],
    pub answer: &'static str,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Term {
    pub name: &'static str,
    pub emoji: &'static str,
    pub category: Category,
    pub definition: &'static str,
    pub example: &'static str,
    pub prefill: Prefill,
    pub quiz: Quiz,
}

pub const TERMS: &[Term] = &[
    Term {
        name: "Moneyline",
        emoji: "💵",
        category: Category::BetType,
        definition: "A bet on which team will win the game outright, regardless of the score margin.",
        example: "Betting on the Knicks at +150 means a $100 bet returns $150 if they win.",
        prefill: Prefill { format: OddsFormat::American, odds: "+150", stake: 100.0 },
        quiz: Quiz {
            question: "What does +150 mean in a moneyline bet?",
            choices: &[
                "Bet $150 to win $100",
                "Bet $100 to win $150",
                "Team must win by more than 3 points",
            ],
            answer: "Bet $100 to win $150",
        },
    },
    Term {
        name: "Point Spread",
        emoji: "📊",
        category: Category::BetType,
        definition: "A handicap given to the favorite team to make the betting odds more even.",
        example: "If the 49ers are -7 favorites, they must win by more than 7 points to cover the spread.",
        prefill: Prefill { format: OddsFormat::American, odds: "-110", stake: 100.0 },
        quiz: Quiz {
            question: "If a team is -6.5 favorites, what must happen for your bet to win?",
            choices: &[
                "They must win by at least 6 points",
                "They must win by more than 6.5 points",
                "They must lose by less than 6 points",
            ],
            answer: "They must win by more than 6.5 points",
        },
    },
    Term {
        name: "Over/Under (Totals)",
        emoji: "📈",
        category: Category::BetType,
        definition: "A bet on whether the total combined score of both teams will be over or under a specified number.",
        example: "Betting over 44.5 means the total score must be 45 or higher to win.",
        prefill: Prefill { format: OddsFormat::American, odds: "-110", stake: 50.0 },
        quiz: Quiz {
            question: "If you bet the over on 44.5 and the game ends 24-21, what happens?",
            choices: &["You win", "You lose", "It's a push"],
            answer: "You win",
        },
    },
    Term {
        name: "Parlay",
        emoji: "🎯",
        category: Category::Strategy,
        definition: "A single bet that combines multiple individual bets, where all selections must win for the bet to pay out.",
        example: "Betting on 3 teams to win. If one loses, the entire parlay loses.",
        prefill: Prefill { format: OddsFormat::American, odds: "+600", stake: 50.0 },
        quiz: Quiz {
            question: "What happens if one leg of your parlay loses?",
            choices: &[
                "You still win part of the bet",
                "The entire parlay loses",
                "Only that leg is void",
            ],
            answer: "The entire parlay loses",
        },
    },
    Term {
        name: "Prop Bet",
        emoji: "🎪",
        category: Category::BetType,
        definition: "A bet on a specific event or occurrence within a game that doesn't directly affect the final score.",
        example: "Betting on which player will score the first touchdown.",
        prefill: Prefill { format: OddsFormat::American, odds: "+400", stake: 25.0 },
        quiz: Quiz {
            question: "Which is an example of a prop bet?",
            choices: &[
                "Team A wins the game",
                "Total score is over 45",
                "Player X scores a touchdown",
            ],
            answer: "Player X scores a touchdown",
        },
    },
    Term {
        name: "Juice (Vig)",
        emoji: "💰",
        category: Category::Slang,
        definition: "The commission a sportsbook builds into the odds for taking a bet.",
        example: "Both sides of a spread listed at -110 means the book keeps a cut no matter who wins.",
        prefill: Prefill { format: OddsFormat::American, odds: "-110", stake: 110.0 },
        quiz: Quiz {
            question: "Why are both sides of a point spread usually listed at -110 instead of +100?",
            choices: &[
                "The favorite is expected to win",
                "The sportsbook builds its commission into the price",
                "Bettors prefer round numbers",
            ],
            answer: "The sportsbook builds its commission into the price",
        },
    },
    Term {
        name: "Chalk",
        emoji: "🖍️",
        category: Category::Slang,
        definition: "The favorite in a game; chalk bettors back heavy favorites.",
        example: "Taking the chalk at -250 wins often but pays little.",
        prefill: Prefill { format: OddsFormat::American, odds: "-250", stake: 100.0 },
        quiz: Quiz {
            question: "What does it mean to 'bet the chalk'?",
            choices: &["Bet on the favorite", "Bet on the underdog", "Bet the over"],
            answer: "Bet on the favorite",
        },
    },
    Term {
        name: "American Odds",
        emoji: "🔢",
        category: Category::OddsFormat,
        definition: "Signed whole-number prices based on $100: positive shows profit on a $100 stake, negative shows the stake needed to profit $100.",
        example: "+150 profits $150 on a $100 stake; -150 needs $150 staked to profit $100.",
        prefill: Prefill { format: OddsFormat::American, odds: "-150", stake: 100.0 },
        quiz: Quiz {
            question: "At -200, how much must you stake to profit $100?",
            choices: &["$50", "$100", "$200"],
            answer: "$200",
        },
    },
    Term {
        name: "Decimal Odds",
        emoji: "🧮",
        category: Category::OddsFormat,
        definition: "A single multiplier showing total return per unit staked, stake included.",
        example: "At 1.91, a $100 bet returns $191 including your stake.",
        prefill: Prefill { format: OddsFormat::Decimal, odds: "1.91", stake: 100.0 },
        quiz: Quiz {
            question: "What does a decimal price of 2.50 return in total on a $10 stake?",
            choices: &["$15", "$25", "$35"],
            answer: "$25",
        },
    },
    Term {
        name: "Fractional Odds",
        emoji: "➗",
        category: Category::OddsFormat,
        definition: "A profit ratio relative to stake, written numerator/denominator, stake excluded.",
        example: "At 10/11, a $110 bet profits $100 for a $210 total return.",
        prefill: Prefill { format: OddsFormat::Fractional, odds: "10/11", stake: 110.0 },
        quiz: Quiz {
            question: "At 3/1, what is the profit on a $20 stake?",
            choices: &["$20", "$60", "$80"],
            answer: "$60",
        },
    },
];

pub const QUICK_TIPS: &[&str] = &[
    "Always shop around for the best odds - different sportsbooks offer different lines",
    "Start with small stakes while learning new bet types",
    "Keep track of your bets to identify patterns and improve your strategy",
    "Don't chase losses - stick to your betting plan",
    "Consider the weather conditions for outdoor sports",
    "Research team injuries and lineup changes before placing bets",
    "Understand the difference between American, Decimal, and Fractional odds",
    "Don't bet more than you can afford to lose",
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::odds;

    #[test]
    fn every_prefill_feeds_the_calculator() {
        for term in TERMS {
            let p = term.prefill;
            assert!(odds::validate(p.odds, p.format), "{} prefill odds", term.name);
            assert!(
                odds::calculate(p.format, p.odds, &p.stake.to_string()).is_ok(),
                "{} prefill does not calculate",
                term.name
            );
        }
    }

    #[test]
    fn every_quiz_answer_is_one_of_its_choices() {
        for term in TERMS {
            assert!(term.quiz.choices.len() >= 2, "{}", term.name);
            assert!(
                term.quiz.choices.contains(&term.quiz.answer),
                "{} quiz answer missing from choices",
                term.name
            );
        }
    }

    #[test]
    fn every_category_filter_matches_at_least_one_term() {
        for category in Category::all() {
            assert!(
                TERMS.iter().any(|t| t.category == *category),
                "no terms in {}",
                category.label()
            );
        }
    }

    #[test]
    fn term_names_are_unique() {
        for (i, term) in TERMS.iter().enumerate() {
            assert!(
                TERMS[i + 1..].iter().all(|other| other.name != term.name),
                "duplicate term {}",
                term.name
            );
        }
    }
}
