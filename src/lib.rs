// Supertopics: cross-period topic similarity and super-topic grouping.
//
// This is the library root. Each module corresponds to one stage of the
// batch pipeline: load BTM topic words per month, score every pair of
// months against each other, assemble the similarity graph, then threshold
// and group topics across months into super-topics.

pub mod config;
pub mod corpus;
pub mod graph;
pub mod grouping;
pub mod output;
pub mod period;
pub mod pipeline;
pub mod similarity;
pub mod status;
