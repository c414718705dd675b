mod readiness;
