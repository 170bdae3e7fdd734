use super::{extract, urls::*};
use crate::{
    error::*,
    fetch::{HttpFetcher, PageFetcher},
    model::*,
};

pub struct CodeforcesClient {
    fetcher: Box<dyn PageFetcher>,
    host: String,
}

impl CodeforcesClient {
    pub fn new() -> Result<Self> {
        Ok(Self::with_fetcher(HttpFetcher::new()?))
    }

    pub fn with_fetcher(fetcher: impl PageFetcher + 'static) -> Self {
        Self {
            fetcher: Box::new(fetcher),
            host: DOMAIN.to_owned(),
        }
    }

    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn get_host(&self) -> &str {
        &self.host
    }

    pub fn problem_url(&self, key: &ProblemKey) -> Result<Url> {
        CodeforcesUrlAnalyzer::problem_url(&self.host, key)
    }

    pub async fn fetch_problem_page(&self, key: &ProblemKey) -> Result<String> {
        let url = self.problem_url(key)?;
        self.fetcher.fetch(&url).await
    }

    pub async fn fetch_samples(&self, key: &ProblemKey) -> Result<Vec<SampleCase>> {
        let raw = self.fetch_problem_page(key).await?;
        extract::extract_samples(&raw)
    }
}
