//! AI 配置与预设角色

use serde::{Deserialize, Serialize};

use crate::error::AiError;
use crate::evaluate::Evaluator;
use crate::greedy::GreedyAi;
use crate::heuristic::Heuristic;
use crate::player::Decider;
use crate::random::RandomAi;
use crate::search::{SearchAi, SearchConfig};

/// 搜索层数上限
pub const MAX_SEARCH_DEPTH: i32 = 10;

/// 启发式权重绝对值上限
pub const MAX_HEURISTIC_WEIGHT: i64 = 1_000_000;

/// 选点策略
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum PolicyConfig {
    /// 单层贪心
    Greedy,
    /// Alpha-Beta 搜索
    Search(SearchConfig),
    /// 随机
    Random {
        #[serde(default)]
        seed: u64,
    },
}

/// 一个 AI 玩家的完整配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiProfile {
    pub name: String,
    pub policy: PolicyConfig,
    #[serde(default)]
    pub heuristics: Vec<Heuristic>,
}

impl AiProfile {
    pub fn new(name: impl Into<String>, policy: PolicyConfig, heuristics: Vec<Heuristic>) -> Self {
        Self {
            name: name.into(),
            policy,
            heuristics,
        }
    }

    /// 从 JSON 字符串解析
    pub fn from_json(json: &str) -> Result<Self, AiError> {
        let profile: Self = serde_json::from_str(json)?;
        profile.validate()?;
        Ok(profile)
    }

    /// 检查配置
    pub fn validate(&self) -> Result<(), AiError> {
        if let PolicyConfig::Search(config) = &self.policy {
            if config.depth > MAX_SEARCH_DEPTH {
                return Err(AiError::InvalidProfile(format!(
                    "{}: search depth {} exceeds {}",
                    self.name, config.depth, MAX_SEARCH_DEPTH
                )));
            }
        }

        if let Some(heuristic) = self
            .heuristics
            .iter()
            .find(|h| h.weight.unsigned_abs() > MAX_HEURISTIC_WEIGHT as u64)
        {
            return Err(AiError::InvalidProfile(format!(
                "{}: {} weight {} exceeds ±{}",
                self.name,
                heuristic.name(),
                heuristic.weight,
                MAX_HEURISTIC_WEIGHT
            )));
        }

        if self.heuristics.is_empty() && !matches!(self.policy, PolicyConfig::Random { .. }) {
            tracing::warn!("{} 没有配置启发式，所有局面评分为 0", self.name);
        }

        Ok(())
    }

    /// 构建选点器
    pub fn build(&self) -> Result<Box<dyn Decider>, AiError> {
        self.validate()?;

        let evaluator = Evaluator::new(self.heuristics.clone());
        let decider: Box<dyn Decider> = match &self.policy {
            PolicyConfig::Greedy => Box::new(GreedyAi::new(self.name.clone(), evaluator)),
            PolicyConfig::Search(config) => {
                Box::new(SearchAi::new(self.name.clone(), config.clone(), evaluator))
            }
            PolicyConfig::Random { seed } => Box::new(RandomAi::new(self.name.clone(), *seed)),
        };
        Ok(decider)
    }
}

/// 预设角色
pub struct Roster;

impl Roster {
    /// 所有预设角色名
    pub fn names() -> &'static [&'static str] {
        &[
            "pieces",
            "mobility",
            "hybrid",
            "hybrid-curves",
            "shallow",
            "shallow-simple",
            "random",
        ]
    }

    /// 按名称获取预设角色
    pub fn avatar(name: &str) -> Result<AiProfile, AiError> {
        let profile = match name {
            "pieces" => AiProfile::new("Pieces", PolicyConfig::Greedy, vec![Heuristic::max_pieces(1)]),
            "mobility" => AiProfile::new(
                "Mobility",
                PolicyConfig::Greedy,
                vec![Heuristic::min_mobility(1)],
            ),
            "hybrid" => AiProfile::new(
                "Hybrid",
                PolicyConfig::Greedy,
                vec![Heuristic::max_pieces(75), Heuristic::min_mobility(25)],
            ),
            "hybrid-curves" => AiProfile::new(
                "Hybrid Curves",
                PolicyConfig::Greedy,
                vec![
                    Heuristic::max_pieces(40),
                    Heuristic::min_mobility(65),
                    Heuristic::piece_table(100),
                ],
            ),
            "shallow" => AiProfile::new(
                "Shallow Mind",
                PolicyConfig::Search(SearchConfig::with_depth(3)),
                vec![
                    Heuristic::piece_table(100),
                    Heuristic::max_pieces(30),
                    Heuristic::min_mobility(50),
                    Heuristic::stability(60),
                    Heuristic::parity(75),
                ],
            ),
            "shallow-simple" => AiProfile::new(
                "Shallow Mind Simplified",
                PolicyConfig::Search(SearchConfig::with_depth(3)),
                vec![Heuristic::max_pieces(40)],
            ),
            "random" => AiProfile::new("Random", PolicyConfig::Random { seed: 0 }, Vec::new()),
            _ => return Err(AiError::UnknownAvatar(name.to_string())),
        };
        Ok(profile)
    }
}
