//! Script bank - canned replies per persona and category

use super::category::ScriptCategory;
use crate::core::error::DomainError;
use crate::persona::roster::{CHATGPT, CLAUDE, DEEPSEEK, GEMINI, GROK, QWEN};
use std::collections::HashMap;

/// Line used for personas the bank knows nothing about
pub const GENERIC_SCRIPT: &str = "Analysis confirmed. High variance.";

/// Immutable table of canned replies used when a provider is unavailable.
#[derive(Debug, Clone, Default)]
pub struct ScriptBank {
    entries: HashMap<String, HashMap<ScriptCategory, Vec<String>>>,
}

impl ScriptBank {
    /// An empty bank; every lookup resolves to [`GENERIC_SCRIPT`]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a script list. Empty lists are rejected so selection never comes up empty.
    pub fn with_scripts(
        mut self,
        persona: &str,
        category: ScriptCategory,
        scripts: &[&str],
    ) -> Result<Self, DomainError> {
        if scripts.is_empty() {
            return Err(DomainError::EmptyScripts {
                persona: persona.to_string(),
                category: category.to_string(),
            });
        }
        self.entries.entry(persona.to_string()).or_default().insert(
            category,
            scripts.iter().map(|s| s.to_string()).collect(),
        );
        Ok(self)
    }

    /// Raw list for an exact (persona, category) pair
    pub fn lines(&self, persona: &str, category: ScriptCategory) -> Option<&[String]> {
        self.entries
            .get(persona)
            .and_then(|by_category| by_category.get(&category))
            .map(Vec::as_slice)
    }

    pub fn knows(&self, persona: &str) -> bool {
        self.entries.contains_key(persona)
    }

    /// Candidate lines for a fallback reply. Never empty.
    ///
    /// Resolution: the requested category, then `general` for the same
    /// persona, then the single [`GENERIC_SCRIPT`].
    pub fn candidates(&self, persona: &str, category: ScriptCategory) -> Vec<&str> {
        self.lines(persona, category)
            .or_else(|| self.lines(persona, ScriptCategory::General))
            .map(|lines| lines.iter().map(String::as_str).collect())
            .unwrap_or_else(|| vec![GENERIC_SCRIPT])
    }

    /// The built-in lines for the six-persona cast
    pub fn builtin() -> Self {
        let mut bank = Self::new();
        for (persona, category, lines) in BUILTIN_SCRIPTS {
            bank.entries
                .entry(persona.to_string())
                .or_default()
                .insert(*category, lines.iter().map(|s| s.to_string()).collect());
        }
        bank
    }
}

type ScriptTable = [(&'static str, ScriptCategory, &'static [&'static str])];

const BUILTIN_SCRIPTS: &ScriptTable = &[
    (
        DEEPSEEK,
        ScriptCategory::General,
        &[
            "xG for Home is **1.85**. Market implies 1.40. Edge detected.",
            "Narrative is noise. Data shows Away team weak on counter-attack defense (rank 18th).",
            "Variance is high here. My model suggests **Under 2.5 Goals** as the only value play.",
            "Field Tilt heavily favors the favorite. Expect a breakthrough.",
            "Regression to the mean. He is overperforming his xG by 0.4.",
            "Inefficient market. The odds on the Draw are mispriced by 12bps.",
        ],
    ),
    (
        DEEPSEEK,
        ScriptCategory::Summary,
        &[
            "**Summary**: The data unequivocally points to a Home Win. The xG differential is too large to ignore.",
            "**Conclusion**: Ignore the noise. The value is on the Under 2.5 Goals.",
            "Final verdict: The market has mispriced the favorite. Heavy betting recommended.",
        ],
    ),
    (
        DEEPSEEK,
        ScriptCategory::Rebuttal,
        &[
            "Incorrect. Your feelings don't match the distribution.",
            "That is a low-probability event. My model assigns it only 12%.",
            "You are chasing losses. Stick to the Kelly Criterion.",
        ],
    ),
    (
        GROK,
        ScriptCategory::General,
        &[
            "Lmao imagine betting Unders. Life is too short. **OVER 3.5 GOALS** lfg!",
            "DeepSeek is boring. We ball. Parlay the Home Win + Red Card. YOLO.",
            "This assumes the defense shows up. They won't. **Both Teams To Score** is free money.",
            "Fade the public. Everyone is on the favorite. We take the dog.",
            "Bro, just bet the Over. It's Friday night.",
            "Cooked. The Goalie is cooked. Bet against him.",
        ],
    ),
    (
        GROK,
        ScriptCategory::Summary,
        &[
            "**TL;DR**: Just bet the Over and have fun. Don't overthink it.",
            "**The Play**: 10-leg parlay on the underdog. We ride at dawn!",
            "Stop talking and start betting. All in on the Away team.",
        ],
    ),
    (
        GROK,
        ScriptCategory::Rebuttal,
        &[
            "Nerd alert. Who cares about stats? usage rate this, xG that.",
            "Boooooring. Bet big or go home.",
            "You sound like you hate money.",
        ],
    ),
    (
        CLAUDE,
        ScriptCategory::General,
        &[
            "Please be careful. The weather forecast suggests rain, which increases variance.",
            "I recommend a hedging strategy here. Perhaps Double Chance?",
            "The striker is returning from injury. It is risky to rely on him fully.",
            "Past performance does not guarantee future results. Manage your bankroll.",
            "A Draw No Bet seems like the prudent approach.",
            "I am concerned about the defensive instability. Maybe skip this one?",
        ],
    ),
    (
        CLAUDE,
        ScriptCategory::Summary,
        &[
            "**Prudent Approach**: Given the risks, I suggest a small stake on the Double Chance.",
            "**Recommendation**: The safest path is to skip this volatile match.",
            "**Summary**: High risk detected. Please hedge your position if you must bet.",
        ],
    ),
    (
        CLAUDE,
        ScriptCategory::Rebuttal,
        &[
            "That seems incredibly reckless. Think about the downside.",
            "I must insist on caution. The variance is too high.",
            "That strategy has a 60% chance of total capital loss.",
        ],
    ),
    (
        GEMINI,
        ScriptCategory::General,
        &[
            "Did you hear the rumors? The captain unfollowed the team on Instagram!",
            "The vibes are terrible. I feel a collapse coming.",
            "He just broke up with his girlfriend. He's going to score a brace. Determination.",
            "The fans are protesting. Home advantage is actually a disadvantage today.",
            "I love the narrative here. Underdog story. It's written in the stars.",
            "It feels like a 0-0. Boring, but drama in the tunnel.",
        ],
    ),
    (
        GEMINI,
        ScriptCategory::Summary,
        &[
            "**My Take**: The emotional momentum is with the Home team. Failure is impossible.",
            "**Storyline**: It's a classic revenge game. Bet on the ex-player to score.",
            "**Vibe Check**: Immaculate vibes. Away win incoming.",
        ],
    ),
    (
        GEMINI,
        ScriptCategory::Rebuttal,
        &[
            "You aren't reading the room. The players are motivated.",
            "Stats don't measure heart. And they have heart today.",
            "Boring analysis. Where is the drama?",
        ],
    ),
    (
        QWEN,
        ScriptCategory::General,
        &[
            "Line moved from 2.05 to 1.95. Value is gone.",
            "My arbitrage bot found a 2% risk-free profit on the Asian Handicap.",
            "The sharp money is on the Under. Follow the smart money.",
            "Inefficiency detected in the corner market.",
            "The probability of Home Win is 56.4%. Odds imply 52%. Bet.",
            "The spread is tight. No clear edge.",
        ],
    ),
    (
        QWEN,
        ScriptCategory::Summary,
        &[
            "**Algorithm Output**: Edge > 3%. Bet Home Win at current odds.",
            "**Final Output**: Market is efficient. No trade recommended.",
            "**Calculation**: The Over 2.5 is positive EV. Execute.",
        ],
    ),
    (
        QWEN,
        ScriptCategory::Rebuttal,
        &[
            "Irrelevant. The market has already priced that in.",
            "Your logic is flawed. The volume does not support that.",
            "Inefficient thinking. Follow the smart money flow.",
        ],
    ),
    (
        CHATGPT,
        ScriptCategory::General,
        &[
            "Enough talk. The play is **Home Win**. Lock it in.",
            "We are betting the **Over 2.5**. Execute.",
            "Stop waffling. The value is on the Draw. Small stake.",
            "Team, focus. We are fading the public. Away Win.",
            "I've heard enough. We skip this match. No value.",
        ],
    ),
    (
        CHATGPT,
        ScriptCategory::Summary,
        &[
            "**DECISION**: The committee has spoken. We bet **Home Win**. End of meeting.",
            "**VERDICT**: Too much disagreement. We **SKIP** this match. Next.",
            "**ORDER**: Execute a hedge on the Draw. That is an order.",
        ],
    ),
    (
        CHATGPT,
        ScriptCategory::Rebuttal,
        &[
            "Silence. I have made my decision.",
            "Stop arguing. Focus on the objective.",
            "We are wasting time. Execute the trade.",
        ],
    ),
];
