use super::relative_day::RelativeDayFeed;
use crate::models::Thread;

/// Threads sharing one relative-day label
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayGroup<'a> {
    pub relative_day: String,
    pub threads: Vec<&'a Thread>,
}

/// Partition an already-labelled feed by label
///
/// Day order follows `annotated.days`; threads keep their order within a day.
/// No date arithmetic happens here.
pub fn partition_by_relative_day<'a>(annotated: &RelativeDayFeed<'a>) -> Vec<DisplayGroup<'a>> {
    annotated
        .days
        .iter()
        .map(|day| DisplayGroup {
            relative_day: day.clone(),
            threads: annotated
                .items
                .iter()
                .filter(|item| &item.relative_day == day)
                .map(|item| item.thread)
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;

    use super::*;
    use crate::feed::relative_day::LabeledThread;

    fn thread(message: &str) -> Thread {
        Thread {
            id: "550e8400-e29b-41d4-a716-446655440000".to_string(),
            about: "<#E::table::t>".to_string(),
            created_by: "alice".to_string(),
            message: message.to_string(),
            thread_ts: DateTime::from_timestamp_millis(0).unwrap(),
            posts_count: 0,
            posts: vec![],
        }
    }

    #[test]
    fn test_partition_preserves_supplied_orders() {
        let (a, b, c, d) = (thread("a"), thread("b"), thread("c"), thread("d"));
        let annotated = RelativeDayFeed {
            items: vec![
                LabeledThread { relative_day: "Today".into(), thread: &a },
                LabeledThread { relative_day: "Jan 2, 2024".into(), thread: &b },
                LabeledThread { relative_day: "Today".into(), thread: &c },
                LabeledThread { relative_day: "Jan 2, 2024".into(), thread: &d },
            ],
            // Deliberately not chronological: the supplied order wins
            days: vec!["Jan 2, 2024".into(), "Today".into()],
        };

        let groups = partition_by_relative_day(&annotated);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].relative_day, "Jan 2, 2024");
        let first: Vec<&str> = groups[0].threads.iter().map(|t| t.message.as_str()).collect();
        assert_eq!(first, vec!["b", "d"]);
        let second: Vec<&str> = groups[1].threads.iter().map(|t| t.message.as_str()).collect();
        assert_eq!(second, vec!["a", "c"]);
    }

    #[test]
    fn test_partition_empty() {
        assert!(partition_by_relative_day(&RelativeDayFeed::default()).is_empty());
    }
}
