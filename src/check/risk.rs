/// Whether a webhook can stall pod admission cluster-wide.
///
/// A webhook that ignores failures never blocks admission. Otherwise it needs at
/// least two replicas behind a disruption budget, and must stay out of `kube-system`.
pub fn is_risky(
    failure_policy_ignores: bool,
    replicas: usize,
    has_disruption_budget: bool,
    kube_system_excluded: bool,
) -> bool {
    if failure_policy_ignores {
        return false;
    }
    if !has_disruption_budget || replicas < 2 {
        return true;
    }
    !kube_system_excluded
}

#[cfg(test)]
mod tests {
    use super::is_risky;

    #[test]
    fn test_ignore_policy_is_never_risky() {
        for replicas in [0, 1, 2, 5] {
            for pdb in [false, true] {
                for excluded in [false, true] {
                    assert!(!is_risky(true, replicas, pdb, excluded));
                }
            }
        }
    }

    #[test]
    fn test_missing_pdb_is_risky() {
        for replicas in [0, 1, 3] {
            for excluded in [false, true] {
                assert!(is_risky(false, replicas, false, excluded));
            }
        }
    }

    #[test]
    fn test_single_replica_is_risky() {
        assert!(is_risky(false, 1, true, true));
        assert!(is_risky(false, 0, true, true));
    }

    #[test]
    fn test_protected_workload_depends_on_kube_system() {
        for replicas in [2, 3, 10] {
            assert!(is_risky(false, replicas, true, false));
            assert!(!is_risky(false, replicas, true, true));
        }
    }
}
