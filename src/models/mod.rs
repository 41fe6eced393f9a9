mod report;

pub use report::{
    BusinessDataInput, BusinessReport, BusinessSubject, HeadlineQuery, HeadlineResponse,
};
