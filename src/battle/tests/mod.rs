pub mod common;






#[cfg(test)]
mod test_trainer_battle;
