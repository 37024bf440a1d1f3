// clc-miner — proof-of-work miner for the CLC challenge pool.
// Licensed under the MIT License.
//
// The single shared mining job. Workers take a cheap snapshot on every
// iteration rather than holding the lock across a hash attempt; the job
// manager installs a new job only when the seed actually changes.

use std::sync::Mutex;

use crate::core::types::Job;

pub struct JobSlot {
    inner: Mutex<Job>,
}

impl JobSlot {
    pub fn waiting() -> Self {
        Self {
            inner: Mutex::new(Job::waiting()),
        }
    }

    /// A cloned snapshot of the current job, for a worker to mine against.
    pub fn snapshot(&self) -> Job {
        self.inner.lock().unwrap().clone()
    }

    /// Install `new_job` if its seed differs from the currently installed
    /// one. Returns `true` if the job changed.
    pub fn install_if_changed(&self, new_job: Job) -> bool {
        let mut current = self.inner.lock().unwrap();
        if current.seed != new_job.seed {
            *current = new_job;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_in_waiting_state() {
        let slot = JobSlot::waiting();
        assert!(slot.snapshot().is_waiting());
    }

    #[test]
    fn install_reports_whether_seed_changed() {
        let slot = JobSlot::waiting();
        let job = Job {
            seed: "abc".to_string(),
            diff: [0xffu8; 32],
            reward: 1.0,
            last_found_ms: 0,
        };
        assert!(slot.install_if_changed(job.clone()));
        assert!(!slot.install_if_changed(job));
    }
}
