use assert_cmd::Command;
use std::path::Path;

pub fn wtrack_cmd() -> Command {
    let mut cmd = Command::cargo_bin("wtrack").unwrap();
    cmd.env_remove("WTRACK_ROOT");
    cmd.env_remove("WTRACK_POSITION");
    cmd.env_remove("WTRACK_LOG");
    cmd
}

/// Command running inside an initialized tracker at `root`
#[allow(dead_code)]
pub fn wtrack_in(root: &Path) -> Command {
    let mut cmd = wtrack_cmd();
    cmd.current_dir(root);
    cmd
}

#[allow(dead_code)]
pub fn init_tracker(root: &Path) {
    wtrack_cmd().arg("init").arg(root).assert().success();
}
