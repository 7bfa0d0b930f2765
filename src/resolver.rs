//! The conflict resolver (C3): collapses overlapping candidates into one
//! winner per overlap group, via union-find plus a deterministic total order.

use crate::scanner::Candidate;

/// Resolves `candidates` into a non-overlapping, final match list.
///
/// Overlap is defined as intersecting half-open spans. Within each maximal
/// group of transitively-overlapping candidates, the winner is: longest span,
/// then lowest priority value, then lexicographically smallest pattern name.
pub fn resolve(candidates: Vec<Candidate>) -> Vec<Candidate> {
    if candidates.len() <= 1 {
        return candidates;
    }

    let groups = group_by_overlap(&candidates);

    groups
        .into_iter()
        .map(|indices| select_best(&candidates, &indices))
        .collect()
}

/// Builds overlap connected components via union-find, returning each
/// component as a list of indices into `candidates`.
fn group_by_overlap(candidates: &[Candidate]) -> Vec<Vec<usize>> {
    let mut parent: Vec<usize> = (0..candidates.len()).collect();

    fn find(parent: &mut [usize], x: usize) -> usize {
        if parent[x] != x {
            parent[x] = find(parent, parent[x]);
        }
        parent[x]
    }

    fn union(parent: &mut [usize], a: usize, b: usize) {
        let (ra, rb) = (find(parent, a), find(parent, b));
        if ra != rb {
            parent[ra] = rb;
        }
    }

    for i in 0..candidates.len() {
        for j in (i + 1)..candidates.len() {
            if candidates[i].overlaps(&candidates[j]) {
                union(&mut parent, i, j);
            }
        }
    }

    let mut groups: Vec<Vec<usize>> = vec![Vec::new(); candidates.len()];
    for i in 0..candidates.len() {
        let root = find(&mut parent, i);
        groups[root].push(i);
    }

    groups.into_iter().filter(|g| !g.is_empty()).collect()
}

/// Picks the winner from one overlap group: longest span, then lowest
/// priority, then lexicographically smallest pattern name.
fn select_best(candidates: &[Candidate], indices: &[usize]) -> Candidate {
    let winner = indices
        .iter()
        .copied()
        .max_by(|&a, &b| {
            let (ca, cb) = (&candidates[a], &candidates[b]);
            ca.len()
                .cmp(&cb.len())
                .then_with(|| cb.priority.cmp(&ca.priority))
                .then_with(|| cb.pattern_name.cmp(ca.pattern_name))
        })
        .expect("groups are never empty");

    candidates[winner].clone()
}

/// Analysis of a conflict resolution pass: what was selected and why the
/// rest lost. Additional, informational output for tests; never changes the
/// resolver's behavior.
#[derive(Debug)]
pub struct ConflictReport {
    pub total_candidates: usize,
    pub groups: usize,
    pub conflicted_groups: usize,
}

pub fn analyze(candidates: &[Candidate]) -> ConflictReport {
    if candidates.is_empty() {
        return ConflictReport {
            total_candidates: 0,
            groups: 0,
            conflicted_groups: 0,
        };
    }

    let groups = group_by_overlap(candidates);
    let conflicted_groups = groups.iter().filter(|g| g.len() > 1).count();

    ConflictReport {
        total_candidates: candidates.len(),
        groups: groups.len(),
        conflicted_groups,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::PatternCatalog;
    use crate::scanner::scan;

    #[test]
    fn longest_match_wins_over_subsumed_account_id() {
        let catalog = PatternCatalog::build();
        let text = "Deploy arn:aws:lambda:us-east-1:123456789012:function:ProcessPayment";
        let candidates = scan(&catalog, text);
        let resolved = resolve(candidates);

        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].pattern_name, "lambda_arn");
    }

    #[test]
    fn non_overlapping_candidates_all_survive() {
        let catalog = PatternCatalog::build();
        let text = "EC2 i-0123456789abcdef0 in vpc-12345678 with key AKIA1234567890ABCDEF";
        let candidates = scan(&catalog, text);
        let resolved = resolve(candidates);

        let mut names: Vec<&str> = resolved.iter().map(|c| c.pattern_name).collect();
        names.sort();
        assert_eq!(names, vec!["access_key", "ec2_instance", "vpc"]);
    }

    #[test]
    fn ties_break_on_priority_then_name() {
        use crate::scanner::Candidate;

        let a = Candidate {
            start: 0,
            end: 5,
            text: "alpha".into(),
            pattern_name: "zeta",
            type_tag: "t",
            priority: 100,
            replacement_template: "AWS_T_{:03d}",
        };
        let b = Candidate {
            start: 0,
            end: 5,
            text: "alpha".into(),
            pattern_name: "alpha",
            type_tag: "t",
            priority: 100,
            replacement_template: "AWS_T_{:03d}",
        };

        let resolved = resolve(vec![a, b]);
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].pattern_name, "alpha");
    }

    #[test]
    fn analyze_reports_conflict_groups() {
        let catalog = PatternCatalog::build();
        let text = "Deploy arn:aws:lambda:us-east-1:123456789012:function:ProcessPayment";
        let candidates = scan(&catalog, text);
        let report = analyze(&candidates);

        assert!(report.total_candidates >= 2);
        assert_eq!(report.conflicted_groups, 1);
    }
}
