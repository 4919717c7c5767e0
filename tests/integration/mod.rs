mod timeout_claim_tests;
