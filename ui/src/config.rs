use cellgrid_core::prelude::*;
use std::time::Duration;

use crate::cli::{Cli, RuleKind};
use crate::patterns::Pattern;

#[derive(Debug, Default, Clone)]
pub struct Config {
    pub sim: SimConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone)]
pub struct SimConfig {
    pub size: Size,
    pub generations: u64,
    pub rule: RuleKind,
    pub life_rule: MooreTotalistic2D,
    pub pattern: Pattern,
    pub parallelism: Parallelism,
}
impl Default for SimConfig {
    fn default() -> Self {
        Self {
            size: Size::new(40, 20),
            generations: 50,
            rule: RuleKind::Life,
            life_rule: LIFE,
            pattern: Pattern::Glider,
            parallelism: Parallelism::Rayon,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DisplayConfig {
    pub frame_delay: Duration,
    pub live_glyph: char,
    pub dead_glyph: char,
    // Glyphs for matrix streams, from the head of a stream to its tail.
    pub stream_glyphs: Vec<char>,
}
impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            frame_delay: Duration::from_millis(100),
            live_glyph: '#',
            dead_glyph: '.',
            stream_glyphs: vec!['@', 'W', 'w', ':', '.'],
        }
    }
}

impl Config {
    /// Builds a config from the defaults, overridden by command-line
    /// arguments.
    pub fn from_cli(cli: &Cli) -> anyhow::Result<Self> {
        let mut config = Self::default();
        let sim = &mut config.sim;
        if let Some(width) = cli.width {
            sim.size.width = width;
        }
        if let Some(height) = cli.height {
            sim.size.height = height;
        }
        if !sim.size.is_valid() {
            return Err(InvalidSize::from(sim.size).into());
        }
        if let Some(generations) = cli.generations {
            sim.generations = generations;
        }
        sim.rule = cli.rule;
        if let Some(rulestring) = &cli.life_rule {
            sim.life_rule = rulestring.parse()?;
        }
        if let Some(pattern) = cli.pattern {
            sim.pattern = pattern;
        }
        if cli.serial {
            sim.parallelism = Parallelism::Serial;
        }
        if let Some(delay_ms) = cli.delay_ms {
            config.display.frame_delay = Duration::from_millis(delay_ms);
        }
        Ok(config)
    }
}
