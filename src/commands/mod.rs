pub mod match_cmds;
