use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use chrono::Utc;
use refresh_controller::Edge;
use refresh_logging::{refresh_info, refresh_warn};

use crate::feed::{self, Item};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Job {
    /// Reload the first page (header pull).
    Reload,
    /// Fetch the page that follows `start` existing items (footer pull).
    LoadMore { start: usize },
}

impl Job {
    fn edge(self) -> Edge {
        match self {
            Job::Reload => Edge::Header,
            Job::LoadMore { .. } => Edge::Footer,
        }
    }
}

#[derive(Debug)]
pub struct Completion {
    pub edge: Edge,
    pub items: Vec<Item>,
}

/// Background thread standing in for the network behind refresh callbacks.
#[derive(Clone)]
pub struct Worker {
    job_tx: mpsc::Sender<Job>,
}

impl Worker {
    pub fn spawn(delay: Duration, page_size: usize, done_tx: mpsc::Sender<Completion>) -> Self {
        let (job_tx, job_rx) = mpsc::channel::<Job>();
        thread::spawn(move || {
            while let Ok(job) = job_rx.recv() {
                thread::sleep(delay);
                let start = match job {
                    Job::Reload => 0,
                    Job::LoadMore { start } => start,
                };
                let completion = Completion {
                    edge: job.edge(),
                    items: feed::page(start, page_size, Utc::now()),
                };
                refresh_info!("{:?} finished with {} items", job, completion.items.len());
                if done_tx.send(completion).is_err() {
                    break;
                }
            }
        });
        Self { job_tx }
    }

    pub fn submit(&self, job: Job) {
        refresh_info!("Submitting {:?}", job);
        if let Err(err) = self.job_tx.send(job) {
            refresh_warn!("Worker stopped; dropped {:?}", err.0);
        }
    }
}
