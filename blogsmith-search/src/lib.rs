mod tavily;

pub use tavily::{SearchDepth, TavilyClient, TavilyClientBuilder, TAVILY_BASE_URL};
