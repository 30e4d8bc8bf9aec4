mod game_flow;
mod invariants;
mod replay;
