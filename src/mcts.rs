//! Monte Carlo tree search over an arena-allocated game tree.
//!
//! Each search iteration runs four phases:
//!
//! 1. tree policy - descend from the root; the first node holding an
//!    unexpanded move pops it (generation order) and grows one child,
//!    which ends the descent. Fully expanded nodes are crossed by
//!    following the current best child with the configured exploit
//!    probability and a uniformly random child otherwise.
//! 2. default policy - from the node reached above, walk uniformly random
//!    children of the already-built tree until a childless node. The walk
//!    never simulates beyond what has been expanded so far.
//! 3. evaluation - the stopping node's computed average: childless nodes
//!    score as their disc differential frozen at creation, interior nodes
//!    as the mean of their children's computed averages.
//! 4. backpropagation - every node from the phase-1 node up to the root
//!    has its visit count bumped and its stored average overwritten with
//!    the new value.
//!
//! Two behaviors here are contracts, not oversights: a stored average
//! holds the most recent backpropagated sample rather than a running
//! mean, and the best-child comparison folds from below any attainable
//! score for the maximizer but from exactly 0.0 for the minimizer.
//! Callers depend on both.
//!
//! Nodes live in a flat arena indexed by [`NodeId`]; parent links are
//! plain back-indices, which keeps the descent and backpropagation loops
//! free of ownership cycles.

use crate::board::{BoardState, Move, Player};
use crate::constants::{DEFAULT_ITERATIONS, EXPLOIT_PROBABILITY};
use crate::strategy::Strategy;

/// Stable handle to a node in a [`SearchTree`] arena.
pub type NodeId = usize;

/// One position in the search tree plus its search bookkeeping.
///
/// `untried` and `children` together partition the position's full
/// legal-move set: a move waits in `untried` until its expansion turns it
/// into the child at the matching index of `children`.
pub struct SearchNode {
    state: BoardState,
    /// Back-index into the arena; `None` only at the root.
    parent: Option<NodeId>,
    /// Move that produced this position; `None` only at the root.
    action: Option<Move>,
    untried: Vec<Move>,
    children: Vec<NodeId>,
    visits: u32,
    /// Most recent backpropagated sample; see the module doc.
    average_score: f64,
    /// Disc differential frozen at node creation.
    score: i32,
}

/// Search configuration.
#[derive(Copy, Clone, Debug)]
pub struct MctsConfig {
    /// Number of search iterations per decision.
    pub iterations: usize,
    /// Fraction of descent steps through a fully expanded node that follow
    /// the current best child; the remainder pick a random child.
    pub exploit_probability: f64,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            exploit_probability: EXPLOIT_PROBABILITY,
        }
    }
}

/// Arena of [`SearchNode`]s for one search call. Index 0 is the root.
pub struct SearchTree {
    nodes: Vec<SearchNode>,
}

impl SearchTree {
    pub const ROOT: NodeId = 0;

    pub fn new(state: BoardState) -> Self {
        let mut tree = Self { nodes: Vec::new() };
        tree.add_node(state, None, None);
        tree
    }

    fn add_node(
        &mut self,
        state: BoardState,
        parent: Option<NodeId>,
        action: Option<Move>,
    ) -> NodeId {
        let id = self.nodes.len();
        let untried = state.legal_moves(state.to_move);
        let score = state.score();
        self.nodes.push(SearchNode {
            state,
            parent,
            action,
            untried,
            children: Vec::new(),
            visits: 0,
            average_score: 0.0,
            score,
        });
        id
    }

    /// One full search iteration: expand (or land on) a node, roll out
    /// through the built tree, evaluate the stopping node, and propagate
    /// the value back to the root.
    pub fn run_iteration(&mut self, exploit_probability: f64, rng: &mut fastrand::Rng) {
        let expanded = self.tree_policy(exploit_probability, rng);
        let stopped = self.default_policy(expanded, rng);
        let value = self.computed_average(stopped);
        self.backup(expanded, value);
    }

    /// The move on the root's best child, or `None` while the root has no
    /// children (no iterations ran, or the root is terminal).
    pub fn best_action(&mut self) -> Option<Move> {
        let best = self.best_child(Self::ROOT)?;
        self.nodes[best].action
    }

    /// Selection and expansion. Walks down from the root until a node with
    /// an unexpanded move is found (expand it, return the new child) or a
    /// node with neither untried moves nor children is reached (return it;
    /// the tree stops growing through such nodes).
    fn tree_policy(&mut self, exploit_probability: f64, rng: &mut fastrand::Rng) -> NodeId {
        let mut node = Self::ROOT;
        loop {
            if !self.nodes[node].untried.is_empty() {
                let mv = self.nodes[node].untried.remove(0);
                let child_state = self.nodes[node].state.apply_move_cloning(Some(mv));
                let child = self.add_node(child_state, Some(node), Some(mv));
                self.nodes[node].children.push(child);
                return child;
            }
            if self.nodes[node].children.is_empty() {
                return node;
            }
            node = if rng.f64() < exploit_probability {
                self.best_child(node)
                    .expect("fully expanded node has children")
            } else {
                let children = &self.nodes[node].children;
                children[rng.usize(..children.len())]
            };
        }
    }

    /// Rollout over the existing tree: step to uniformly random children
    /// until a childless node.
    fn default_policy(&self, mut node: NodeId, rng: &mut fastrand::Rng) -> NodeId {
        loop {
            let children = &self.nodes[node].children;
            if children.is_empty() {
                return node;
            }
            node = children[rng.usize(..children.len())];
        }
    }

    /// The node's computed average: its frozen creation-time score when
    /// childless, otherwise the mean of its children's computed averages.
    /// Interior nodes get their stored average refreshed as a side effect;
    /// childless nodes keep theirs untouched.
    fn computed_average(&mut self, node: NodeId) -> f64 {
        let child_count = self.nodes[node].children.len();
        if child_count == 0 {
            return self.nodes[node].score as f64;
        }
        let mut sum = 0.0;
        for i in 0..child_count {
            let child = self.nodes[node].children[i];
            sum += self.computed_average(child);
        }
        let average = sum / child_count as f64;
        self.nodes[node].average_score = average;
        average
    }

    /// Walk from `node` to the root, bumping each visit count and
    /// overwriting each stored average with `value`.
    fn backup(&mut self, node: NodeId, value: f64) {
        let mut current = Some(node);
        while let Some(id) = current {
            let entry = &mut self.nodes[id];
            entry.visits += 1;
            entry.average_score = value;
            current = entry.parent;
        }
    }

    /// Best child under the side-to-move convention at `node`, comparing
    /// computed averages. `Dark` to move takes the maximum, folding from
    /// below any attainable score; `Light` to move takes the minimum,
    /// folding from exactly 0.0, so a child must average strictly below
    /// zero to displace the index-0 default. Ties keep the earliest child.
    /// `None` only when the node has no children.
    fn best_child(&mut self, node: NodeId) -> Option<NodeId> {
        if self.nodes[node].children.is_empty() {
            return None;
        }
        let mover = self.nodes[node].state.to_move;
        let mut best_index = 0;
        let mut best_value = match mover {
            Player::Dark => f64::NEG_INFINITY,
            Player::Light => 0.0,
        };
        for i in 0..self.nodes[node].children.len() {
            let child = self.nodes[node].children[i];
            let value = self.computed_average(child);
            let improved = match mover {
                Player::Dark => value > best_value,
                Player::Light => value < best_value,
            };
            if improved {
                best_value = value;
                best_index = i;
            }
        }
        Some(self.nodes[node].children[best_index])
    }
}

/// Run a full search from `state` and return the chosen move, or `None`
/// when the root never grew a child.
pub fn search(state: &BoardState, config: &MctsConfig, rng: &mut fastrand::Rng) -> Option<Move> {
    let mut tree = SearchTree::new(state.clone());
    for _ in 0..config.iterations {
        tree.run_iteration(config.exploit_probability, rng);
    }
    tree.best_action()
}

/// Monte Carlo player owning its configuration and random source.
pub struct MonteCarloTreeSearchStrategy {
    config: MctsConfig,
    rng: fastrand::Rng,
}

impl MonteCarloTreeSearchStrategy {
    pub fn new() -> Self {
        Self::with_config(MctsConfig::default())
    }

    pub fn with_config(config: MctsConfig) -> Self {
        Self {
            config,
            rng: fastrand::Rng::new(),
        }
    }

    /// Deterministic variant: every stochastic decision point draws from
    /// the seeded generator, so equal seeds replay equal searches.
    pub fn seeded(config: MctsConfig, seed: u64) -> Self {
        Self {
            config,
            rng: fastrand::Rng::with_seed(seed),
        }
    }
}

impl Default for MonteCarloTreeSearchStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for MonteCarloTreeSearchStrategy {
    fn name(&self) -> &'static str {
        "mcts"
    }

    fn choose_move(&mut self, state: &BoardState) -> Option<Move> {
        search(state, &self.config, &mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rng() -> fastrand::Rng {
        fastrand::Rng::with_seed(42)
    }

    #[test]
    fn zero_iterations_pass() {
        let config = MctsConfig {
            iterations: 0,
            ..Default::default()
        };
        assert_eq!(search(&BoardState::new(8), &config, &mut rng()), None);
    }

    #[test]
    fn terminal_root_passes() {
        // The 2x2 opening is already over: four discs, nothing to capture.
        let state = BoardState::new(2);
        assert!(state.is_terminal());
        let config = MctsConfig {
            iterations: 25,
            ..Default::default()
        };
        assert_eq!(search(&state, &config, &mut rng()), None);
    }

    #[test]
    fn first_iteration_expands_the_first_move() {
        let state = BoardState::new(8);
        let first = state.legal_moves(Player::Dark)[0];
        let mut tree = SearchTree::new(state);
        let mut r = rng();

        let expanded = tree.tree_policy(EXPLOIT_PROBABILITY, &mut r);
        assert_eq!(tree.nodes[expanded].action, Some(first));
        assert_eq!(tree.nodes[expanded].parent, Some(SearchTree::ROOT));
        assert_eq!(tree.nodes[SearchTree::ROOT].children, vec![expanded]);

        // The rollout stops right away at the fresh childless node and its
        // frozen score flows back over the whole path.
        let stopped = tree.default_policy(expanded, &mut r);
        assert_eq!(stopped, expanded);
        let value = tree.computed_average(stopped);
        assert_eq!(value, 3.0);
        tree.backup(expanded, value);
        assert_eq!(tree.nodes[expanded].visits, 1);
        assert_eq!(tree.nodes[SearchTree::ROOT].visits, 1);
        assert_eq!(tree.nodes[SearchTree::ROOT].average_score, 3.0);
    }

    #[test]
    fn untried_and_children_partition_the_legal_moves() {
        let state = BoardState::new(8);
        let legal = state.legal_moves(Player::Dark);
        let mut tree = SearchTree::new(state);
        let mut r = rng();
        for expanded_so_far in 1..=legal.len() {
            tree.tree_policy(EXPLOIT_PROBABILITY, &mut r);
            let root = &tree.nodes[SearchTree::ROOT];
            assert_eq!(root.untried.len() + root.children.len(), legal.len());
            let expanded: Vec<Move> = root
                .children
                .iter()
                .map(|&c| tree.nodes[c].action.unwrap())
                .collect();
            assert_eq!(expanded, &legal[..expanded_so_far]);
            assert_eq!(root.untried, &legal[expanded_so_far..]);
        }
    }

    #[test]
    fn maximizer_takes_the_earliest_of_tied_children() {
        // Four iterations expand exactly the four opening moves, each
        // averaging 3, so the first generated move wins the tie.
        let state = BoardState::new(8);
        let first = state.legal_moves(Player::Dark)[0];
        let config = MctsConfig {
            iterations: 4,
            ..Default::default()
        };
        assert_eq!(search(&state, &config, &mut rng()), Some(first));
    }

    #[test]
    fn minimizer_needs_a_strictly_negative_average() {
        // One ply in, the minimizer is on turn and every reply levels the
        // differential to 0: no child beats the literal 0.0 baseline, so
        // the index-0 child stays selected.
        let state = BoardState::new(8);
        let after = state.apply_move_cloning(Some(state.legal_moves(Player::Dark)[0]));
        let replies = after.legal_moves(Player::Light);
        let config = MctsConfig {
            iterations: replies.len(),
            ..Default::default()
        };
        assert_eq!(search(&after, &config, &mut rng()), Some(replies[0]));
    }

    #[test]
    fn each_iteration_grows_one_node() {
        let state = BoardState::new(8);
        let mut tree = SearchTree::new(state);
        let mut r = rng();
        for _ in 0..30 {
            tree.run_iteration(EXPLOIT_PROBABILITY, &mut r);
        }
        assert_eq!(tree.nodes.len(), 31);
        assert_eq!(tree.nodes[SearchTree::ROOT].visits, 30);
    }

    #[test]
    fn seeded_searches_replay_identically() {
        let state = BoardState::new(6);
        let config = MctsConfig {
            iterations: 300,
            exploit_probability: 0.9,
        };
        let a = search(&state, &config, &mut fastrand::Rng::with_seed(7));
        let b = search(&state, &config, &mut fastrand::Rng::with_seed(7));
        assert_eq!(a, b);
        assert!(state.legal_moves(state.to_move).contains(&a.unwrap()));
    }

    #[test]
    fn explore_only_configuration_still_finds_a_move() {
        let state = BoardState::new(6);
        let config = MctsConfig {
            iterations: 50,
            exploit_probability: 0.0,
        };
        let mv = search(&state, &config, &mut rng()).unwrap();
        assert!(state.legal_moves(state.to_move).contains(&mv));
    }
}
